use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Category, Match, Notification, Report, User};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub users: Arc<Mutex<HashMap<String, User>>>,
        pub categories: Arc<Mutex<HashMap<String, Category>>>,
        pub reports: Arc<Mutex<HashMap<String, Report>>>,
        pub matches: Arc<Mutex<HashMap<String, Match>>>,
        pub notifications: Arc<Mutex<HashMap<String, Notification>>>,
    }
);

impl ReferenceDb {
    /// Remove every object from every collection
    pub async fn clear(&self) {
        self.users.lock().await.clear();
        self.categories.lock().await.clear();
        self.reports.lock().await.clear();
        self.matches.lock().await.clear();
        self.notifications.lock().await.clear();
    }
}
