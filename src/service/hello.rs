/// Greeting used by `/hello/` and `/hello/{name}`.
pub fn hello_message(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("Hello, {}!", name),
        _ => "Hello, World!".to_string(),
    }
}

/// Localised greeting; unknown language codes fall back to English.
pub fn format_greeting(name: &str, language: &str) -> String {
    match language.to_lowercase().as_str() {
        "es" => format!("¡Hola, {}!", name),
        "fr" => format!("Bonjour, {}!", name),
        "de" => format!("Hallo, {}!", name),
        "it" => format!("Ciao, {}!", name),
        _ => hello_message(Some(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_is_the_default() {
        assert_eq!(hello_message(None), "Hello, World!");
        assert_eq!(hello_message(Some("")), "Hello, World!");
    }

    #[test]
    fn names_are_echoed_verbatim() {
        assert_eq!(hello_message(Some("Alice")), "Hello, Alice!");
        assert_eq!(hello_message(Some("123")), "Hello, 123!");
        assert_eq!(hello_message(Some("José María")), "Hello, José María!");
    }

    #[test]
    fn greetings_are_localised() {
        assert_eq!(format_greeting("Ana", "es"), "¡Hola, Ana!");
        assert_eq!(format_greeting("Luc", "FR"), "Bonjour, Luc!");
        assert_eq!(format_greeting("Jan", "de"), "Hallo, Jan!");
        assert_eq!(format_greeting("Gio", "it"), "Ciao, Gio!");
        assert_eq!(format_greeting("Kim", "ko"), "Hello, Kim!");
    }
}
