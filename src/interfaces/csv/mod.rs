pub mod decision_writer;
pub mod request_reader;
pub mod seed_reader;
