use std::sync::Arc;

use roster_db::Connection;
use roster_membership::MemberService;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub members: MemberService<Connection>,
}

impl AppState {
    pub fn new(db: Connection) -> SharedState {
        Arc::new(Self {
            members: MemberService::new(db),
        })
    }
}
