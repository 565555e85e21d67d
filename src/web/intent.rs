use crate::locale::Locale;

/// What the user asked for, decided from the leading words of the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    PlayMusic { query: String },
    WatchMovie { query: String },
    Chat,
}

/// Music is checked before movie; anything else goes to the model.
pub fn detect(prompt: &str, locale: Locale) -> Intent {
    if let Some(rest) = strip_prefix_ignore_case(prompt, locale.music_trigger()) {
        return Intent::PlayMusic {
            query: query_or(rest, locale.default_music_query()),
        };
    }
    if let Some(rest) = strip_prefix_ignore_case(prompt, locale.movie_trigger()) {
        return Intent::WatchMovie {
            query: query_or(rest, locale.default_movie_query()),
        };
    }
    Intent::Chat
}

fn query_or(rest: &str, default: &str) -> String {
    let rest = rest.trim();
    if rest.is_empty() {
        default.to_string()
    } else {
        rest.to_string()
    }
}

/// Returns what follows `prefix` in `text`, comparing lowercased chars so the
/// remainder keeps its original casing.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let end = chars.next().map(|(i, _)| i).unwrap_or(text.len());
    Some(&text[end..])
}
