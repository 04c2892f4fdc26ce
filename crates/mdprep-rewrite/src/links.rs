//! Link destination normalization.
//!
//! Markdown sources link to each other by source file name (`intro.md`),
//! but the rendered site serves permalinks without the extension. The
//! resolver rewrites scheme-less destinations that end in a known markup
//! extension and leaves everything else alone. It deliberately never checks
//! whether the target exists on disk: cross-version and not-yet-built
//! targets must not fail the build.

use std::borrow::Cow;

use pulldown_cmark::{CowStr, Event, Tag};

/// Strategy for resolving a hyperlink destination to its final form.
///
/// The host parser invokes this through composition (see [`resolve_links`])
/// rather than the resolver hooking into the parser itself.
pub trait LinkResolver {
    /// Resolve a raw destination string.
    ///
    /// Returns `Cow::Borrowed` when the destination is untouched.
    fn resolve<'a>(&self, destination: &'a str) -> Cow<'a, str>;
}

/// Resolver that maps source-file links to rendered permalinks.
///
/// Decision order for a destination:
/// 1. has an RFC 3986 scheme component (or is protocol-relative): untouched;
/// 2. scheme-less and the path portion ends in a known markup extension:
///    extension stripped, any `#fragment` kept;
/// 3. anything else: untouched.
///
/// # Example
///
/// ```
/// use mdprep_rewrite::{LinkResolver, PermalinkResolver};
///
/// let resolver = PermalinkResolver::default();
/// assert_eq!(resolver.resolve("intro.md"), "intro");
/// assert_eq!(resolver.resolve("https://example.com/intro.md"), "https://example.com/intro.md");
/// ```
#[derive(Debug, Clone)]
pub struct PermalinkResolver {
    suffixes: Vec<String>,
}

impl PermalinkResolver {
    /// Create a resolver for the given markup extensions (with leading dot).
    #[must_use]
    pub fn new(suffixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for PermalinkResolver {
    /// Resolver for the standard markup extensions, `.md` and `.rst`.
    fn default() -> Self {
        Self::new([".md", ".rst"])
    }
}

impl LinkResolver for PermalinkResolver {
    fn resolve<'a>(&self, destination: &'a str) -> Cow<'a, str> {
        if destination.starts_with('#') || destination.starts_with("//") || has_scheme(destination)
        {
            return Cow::Borrowed(destination);
        }

        let (path, fragment) = match destination.find('#') {
            Some(pos) => (&destination[..pos], &destination[pos..]),
            None => (destination, ""),
        };

        for suffix in &self.suffixes {
            if let Some(stem) = path.strip_suffix(suffix.as_str()) {
                // A bare extension like ".md" is not a file reference.
                if stem.is_empty() || stem.ends_with('/') {
                    break;
                }
                return Cow::Owned(format!("{stem}{fragment}"));
            }
        }

        Cow::Borrowed(destination)
    }
}

/// Check for an RFC 3986 scheme component: an ASCII letter followed by
/// letters, digits, `+`, `-` or `.`, terminated by `:`.
fn has_scheme(destination: &str) -> bool {
    let Some(colon) = destination.find(':') else {
        return false;
    };
    let scheme = &destination[..colon];
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Rewrite link and image destinations in a pulldown-cmark event stream.
///
/// Adapter for the host parser: wrap the parser's event iterator and feed
/// the result to the renderer. Only `Start` tags carry destinations in
/// pulldown-cmark, so end tags pass through untouched.
///
/// # Example
///
/// ```
/// use pulldown_cmark::{Event, Parser, Tag};
/// use mdprep_rewrite::{PermalinkResolver, resolve_links};
///
/// let parser = Parser::new("[intro](intro.md)");
/// let resolver = PermalinkResolver::default();
/// let dest = resolve_links(parser, &resolver)
///     .find_map(|event| match event {
///         Event::Start(Tag::Link { dest_url, .. }) => Some(dest_url.to_string()),
///         _ => None,
///     })
///     .unwrap();
/// assert_eq!(dest, "intro");
/// ```
pub fn resolve_links<'a, I, R>(events: I, resolver: &R) -> impl Iterator<Item = Event<'a>>
where
    I: Iterator<Item = Event<'a>>,
    R: LinkResolver + ?Sized,
{
    events.map(move |event| match event {
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: resolve_dest(dest_url, resolver),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: resolve_dest(dest_url, resolver),
            title,
            id,
        }),
        other => other,
    })
}

/// Run a destination through the resolver, reusing the original string when
/// it comes back untouched.
fn resolve_dest<'a, R>(dest_url: CowStr<'a>, resolver: &R) -> CowStr<'a>
where
    R: LinkResolver + ?Sized,
{
    match resolver.resolve(dest_url.as_ref()) {
        Cow::Borrowed(_) => dest_url,
        Cow::Owned(resolved) => CowStr::from(resolved),
    }
}
