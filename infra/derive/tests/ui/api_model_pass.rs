use nwatch_derive::api_model;

#[api_model]
pub struct Payload {
    pub full_name: String,
    pub notification_enabled: bool,
}

#[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
pub struct Relaxed {
    pub user_id: i64,
}

fn main() {
    let _ = Payload { full_name: String::new(), notification_enabled: true };
    let _ = Relaxed { user_id: 1 };
}
