use crate::locale::Locale;
use crate::web::models::{HistoryMessage, Message, Role};

/// Lays out the conversation for the completion API: the system message,
/// the client's history in order, then the new prompt.
pub fn build_messages(
    prompt: &str,
    history: &[HistoryMessage],
    persona: Option<&str>,
    locale: Locale,
) -> Vec<Message> {
    let persona = persona.unwrap_or_else(|| locale.default_persona());

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message {
        role: Role::System,
        content: locale.system_prompt(persona),
    });
    messages.extend(history.iter().map(|msg| Message {
        role: Role::from_history(&msg.role),
        content: msg.text().to_string(),
    }));
    messages.push(Message {
        role: Role::User,
        content: prompt.to_string(),
    });
    messages
}
