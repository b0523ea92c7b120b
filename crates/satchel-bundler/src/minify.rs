//! Minification of the serialized bundle.
//!
//! The minifier is the only step of a pack run allowed to fail softly: its
//! result is a [`Result`] and the bundler decides to fall back to the
//! unminified text. The bundler also turns a panicking minifier into
//! [`MinifyError::Panicked`]. Anything outside the minifier call still propagates.

use std::any::Any;

use crate::error::MinifyError;

/// Options for the default HTML minifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifyOptions {
    /// Minify the contents of `<script>` elements.
    pub minify_js: bool,
    /// Minify the contents of `<style>` elements and `style` attributes.
    pub minify_css: bool,
    /// Strip `<?...?>` processing instructions.
    pub remove_processing_instructions: bool,
    /// Keep HTML comments in the output.
    pub keep_comments: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            minify_js: true,
            minify_css: true,
            remove_processing_instructions: true,
            keep_comments: false,
        }
    }
}

/// Turns serialized HTML into its minified form.
///
/// Implemented for any `Fn(&str) -> Result<String, MinifyError>`, which makes
/// it easy to plug in a custom minifier:
///
/// ```
/// use satchel_bundler::{Minifier, MinifyError};
///
/// let trim = |html: &str| -> Result<String, MinifyError> { Ok(html.trim().to_string()) };
/// assert_eq!(trim.minify("  <p>x</p>\n").unwrap(), "<p>x</p>");
/// ```
pub trait Minifier {
    fn minify(&self, html: &str) -> Result<String, MinifyError>;
}

impl<F> Minifier for F
where
    F: Fn(&str) -> Result<String, MinifyError>,
{
    fn minify(&self, html: &str) -> Result<String, MinifyError> {
        self(html)
    }
}

/// Default minifier backed by `minify-html`.
pub struct HtmlMinifier {
    cfg: minify_html::Cfg,
}

impl HtmlMinifier {
    pub fn new(options: MinifyOptions) -> Self {
        let cfg = minify_html::Cfg {
            minify_js: options.minify_js,
            minify_css: options.minify_css,
            remove_processing_instructions: options.remove_processing_instructions,
            keep_comments: options.keep_comments,
            ..minify_html::Cfg::default()
        };
        Self { cfg }
    }
}

impl Default for HtmlMinifier {
    fn default() -> Self {
        Self::new(MinifyOptions::default())
    }
}

impl Minifier for HtmlMinifier {
    fn minify(&self, html: &str) -> Result<String, MinifyError> {
        let bytes = minify_html::minify(html.as_bytes(), &self.cfg);
        String::from_utf8(bytes).map_err(|_| MinifyError::InvalidUtf8)
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// What happened during the minification step of a pack run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinifyOutcome {
    /// The document was minified.
    Minified { before: usize, after: usize },
    /// Minification was turned off; the serialized document was written as-is.
    Disabled,
    /// The minifier failed; the serialized document was written as-is.
    Failed(MinifyError),
}

impl MinifyOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, MinifyOutcome::Failed(_))
    }
}
