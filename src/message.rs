use std::sync::Arc;

/// Turns `(label, state, duration)` into the text that gets sent.
pub type MessageFormatter = Arc<dyn Fn(&str, &str, &str) -> String + Send + Sync>;

pub fn formatter<F>(f: F) -> MessageFormatter
where
    F: Fn(&str, &str, &str) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn default_message(label: &str, state: &str, duration: &str) -> String {
    let mut message = format!("Label: {label}\nState: {state}\n");
    if !duration.is_empty() {
        message.push_str(&format!("Duration: {duration} seconds\n"));
    }
    message
}
