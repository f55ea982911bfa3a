use crate::domain::credit::{CreditDecision, CreditPolicy};
use crate::domain::ports::{ClientDirectoryBox, ClockBox, CreditScoringServiceBox, UserStoreBox};
use crate::domain::registration::{RegistrationOutcome, RegistrationRequest, Rejection};
use crate::domain::user::User;
use crate::domain::validation::{self, RegistrationPolicy};
use crate::error::Result;
use chrono::NaiveDate;
use tracing::{debug, info};

/// The entry point for registering users.
///
/// `RegistrationService` validates a request, looks up the client, decides the
/// credit limit from the client's tier and persists the user only when every
/// rule passes. A rejected request leaves no trace in the user store.
pub struct RegistrationService {
    clients: ClientDirectoryBox,
    credit_scoring: CreditScoringServiceBox,
    users: UserStoreBox,
    clock: ClockBox,
    policy: RegistrationPolicy,
}

impl RegistrationService {
    /// Creates a new `RegistrationService` with the default policy.
    ///
    /// # Arguments
    ///
    /// * `clients` - Directory used to resolve the client of a request.
    /// * `credit_scoring` - Service providing base credit scores.
    /// * `users` - Store receiving successfully registered users.
    /// * `clock` - Source of today's date for the age check.
    pub fn new(
        clients: ClientDirectoryBox,
        credit_scoring: CreditScoringServiceBox,
        users: UserStoreBox,
        clock: ClockBox,
    ) -> Self {
        Self {
            clients,
            credit_scoring,
            users,
            clock,
            policy: RegistrationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    /// Registers a user, returning `true` only if the user was saved.
    ///
    /// Every rejection collapses to `Ok(false)`; use [`Self::register`] to learn
    /// which rule failed. Collaborator failures are returned as errors.
    pub fn add_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        date_of_birth: NaiveDate,
        client_id: u32,
    ) -> Result<bool> {
        let request =
            RegistrationRequest::new(first_name, last_name, email, date_of_birth, client_id);
        Ok(self.register(&request)?.is_registered())
    }

    /// Runs the full registration workflow for one request.
    ///
    /// Field validation happens before any collaborator is contacted. The user
    /// is saved exactly once on success and never on rejection.
    #[tracing::instrument(skip_all, fields(email = %request.email, client_id = %request.client_id))]
    pub fn register(&self, request: &RegistrationRequest) -> Result<RegistrationOutcome> {
        if let Some(reason) = self.validate(request) {
            return Ok(reject(reason));
        }

        let Some(client) = self.clients.lookup(request.client_id)? else {
            return Ok(reject(Rejection::ClientNotFound));
        };

        let mut user = User::new(
            request.first_name.as_str(),
            request.last_name.as_str(),
            request.email.as_str(),
            request.date_of_birth,
            client,
        );
        let decision = self.credit_decision_for(&user)?;

        if let Some(value) = decision.value()
            && value < self.policy.minimum_credit_limit
        {
            debug!(credit_limit = %value, "Credit limit below minimum");
            return Ok(reject(Rejection::CreditLimitTooLow));
        }

        user.credit_limit = match decision {
            CreditDecision::Unlimited => None,
            CreditDecision::Limited(limit) => Some(limit),
            // Only reachable with a negative minimum; a stored limit is never negative.
            CreditDecision::BelowZero(value) => {
                debug!(credit_limit = %value, "Credit limit below zero");
                return Ok(reject(Rejection::CreditLimitTooLow));
            }
        };

        self.users.save(user.clone())?;
        info!(has_credit_limit = user.has_credit_limit(), "User registered");
        Ok(RegistrationOutcome::Registered(user))
    }

    fn validate(&self, request: &RegistrationRequest) -> Option<Rejection> {
        if !validation::is_valid_name(&request.first_name, &request.last_name) {
            return Some(Rejection::InvalidName);
        }
        if !validation::is_valid_email(&request.email) {
            return Some(Rejection::InvalidEmail);
        }
        let today = self.clock.today();
        if !validation::is_old_enough(request.date_of_birth, today, self.policy.minimum_age) {
            return Some(Rejection::Underage);
        }
        None
    }

    /// Asks the scoring service for a base score and applies the client's tier.
    ///
    /// The session is dropped when this function returns, on success or error.
    fn credit_decision_for(&self, user: &User) -> Result<CreditDecision> {
        let mut session = self.credit_scoring.acquire()?;
        let base_score = session.score(&user.last_name, user.date_of_birth)?;
        let policy = CreditPolicy::for_client_type(&user.client.client_type);
        debug!(base_score, ?policy, "Credit score received");
        Ok(policy.apply(base_score))
    }
}

fn reject(reason: Rejection) -> RegistrationOutcome {
    info!(%reason, "Registration rejected");
    RegistrationOutcome::Rejected(reason)
}
