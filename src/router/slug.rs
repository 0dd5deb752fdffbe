//! Display-name ↔ URL-slug conversion.
//!
//! Dashes are significant in theory names ("Mind-Brain", "Crick-Koch"), so
//! they cannot double as space markers; spaces encode as underscores
//! instead. Deslugifying restores spaces and re-capitalizes the first letter
//! of every space- or dash-separated word.

/// Lowercase the name and encode spaces as underscores.
pub fn slugify(name: &str) -> String {
    name.chars()
        .flat_map(|c| {
            let c = if c == ' ' { '_' } else { c };
            c.to_lowercase()
        })
        .collect()
}

/// Recover a display name from a slug: underscores become spaces and each
/// word boundary (start, space, dash) gets a capital letter.
pub fn deslugify(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    let mut boundary = true;
    for c in slug.chars() {
        let c = if c == '_' { ' ' } else { c };
        if boundary {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        boundary = c == ' ' || c == '-';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Functionalism"), "functionalism");
        assert_eq!(slugify("Mind-Brain"), "mind-brain");
        assert_eq!(slugify("Brain Circuits"), "brain_circuits");
        assert_eq!(slugify("Soul Realms"), "soul_realms");
    }

    #[test]
    fn test_deslugify() {
        assert_eq!(deslugify("functionalism"), "Functionalism");
        assert_eq!(deslugify("mind-brain"), "Mind-Brain");
        assert_eq!(deslugify("brain_circuits"), "Brain Circuits");
    }

    #[test]
    fn test_round_trip_for_letter_space_dash_names() {
        for name in [
            "Functionalism",
            "Mind-Brain",
            "Brain Circuits",
            "Crick-Koch",
            "Direct Perception",
            "Quantum Extensions",
            "Hebrew Soul",
            "Feinberg-Mallatt",
        ] {
            assert_eq!(deslugify(&slugify(name)), name, "{}", name);
        }
    }
}
