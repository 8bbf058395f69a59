use gitnotify_core::SetupConfirmation;

use crate::text::non_empty;

pub fn setup_message(setup: &SetupConfirmation) -> String {
    let mut message = format!(
        "{} webhook has been successfully configured",
        setup.integration
    );
    if let Some(user) = non_empty(setup.user_name.as_deref()) {
        message.push_str(&format!(" by {user}"));
    }
    message.push('.');
    message
}
