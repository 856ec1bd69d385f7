use crate::ports::ClientActivityRepository;
use sinkhole_dns_domain::{ActivityEntry, ClientIdentity};
use std::sync::Arc;
use tracing::{debug, error};

/// Use case: record that a client looked up a hostname.
///
/// Best-effort. Store failures are logged and never reach the resolution path.
pub struct RecordClientActivityUseCase {
    activity_repo: Arc<dyn ClientActivityRepository>,
}

impl RecordClientActivityUseCase {
    pub fn new(activity_repo: Arc<dyn ClientActivityRepository>) -> Self {
        Self { activity_repo }
    }

    pub async fn execute(&self, client: &ClientIdentity, hostname: &str) {
        debug!(client = %client, hostname = %hostname, "Recording client activity");

        if let Err(e) = self.activity_repo.add_client(client).await {
            // Skip the history append so every history key stays in the roster.
            error!(error = %e, client = %client, "Failed to add client to roster");
            return;
        }

        let entry = ActivityEntry::now(hostname);
        if let Err(e) = self.activity_repo.append_history(client, &entry).await {
            error!(
                error = %e,
                client = %client,
                hostname = %hostname,
                "Failed to append client history"
            );
        }
    }
}
