use crate::bootstrap::Stores;
use sinkhole_dns_application::use_cases::{GetClientsUseCase, ManageBlacklistUseCase};
use std::sync::Arc;

pub struct AdminUseCases {
    pub manage_blacklist: Arc<ManageBlacklistUseCase>,
    pub get_clients: Arc<GetClientsUseCase>,
}

impl AdminUseCases {
    pub fn new(stores: &Stores) -> Self {
        Self {
            manage_blacklist: Arc::new(ManageBlacklistUseCase::new(stores.blacklist.clone())),
            get_clients: Arc::new(GetClientsUseCase::new(stores.activity.clone())),
        }
    }
}
