/// Hides the secret half of a bot token (`<bot id>:<secret>`) for logging.
pub fn mask_token(token: &str) -> String {
    if let Some((bot_id, secret)) = token.split_once(':') {
        if !bot_id.is_empty() && !secret.is_empty() {
            return format!("{bot_id}:***");
        }
    }
    "***".to_string()
}
