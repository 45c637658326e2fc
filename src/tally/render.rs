use crate::surface::Surface;

/// Replaces everything displayed by `surface` with `html`.
///
/// An absent surface is not an error, the call just does nothing. Every call
/// is a full overwrite and `html` goes in as markup, unescaped: anything
/// derived from user input must be escaped by the caller.
pub fn render<S: Surface + ?Sized>(surface: Option<&S>, html: &str) {
    if let Some(surface) = surface {
        surface.set_content(html);
    }
}
