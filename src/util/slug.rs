//! Slug helpers for Battle.net resource paths.
//!
//! Battle.net addresses realms and guilds by slug: lowercase, words joined by `-`, apostrophes
//! dropped ("Kel'Thuzad" → "kelthuzad", "Bleeding Hollow" → "bleeding-hollow").

/// Converts a realm or guild display name into its Battle.net slug.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.trim().chars() {
        if c == '\'' || c == '’' {
            continue;
        }

        if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = !slug.is_empty();
            continue;
        }

        if pending_dash {
            slug.push('-');
            pending_dash = false;
        }
        slug.extend(c.to_lowercase());
    }

    slug
}
