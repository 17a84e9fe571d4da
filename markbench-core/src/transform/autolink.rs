// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Bare URL rewriting for converters without native autolink support.

use linkify::{LinkFinder, LinkKind};

/// Rewrites bare `http(s)://` URLs into CommonMark `<url>` autolinks.
pub(crate) struct Autolinker {
    finder: LinkFinder,
}

impl Autolinker {
    pub(crate) fn new() -> Self {
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url]);
        finder.url_must_have_scheme(true);
        Self { finder }
    }

    /// Write `text` into `out` with bare URLs wrapped in angle brackets.
    /// `out` is cleared first.
    pub(crate) fn rewrite_into(&self, text: &str, out: &mut String) {
        out.clear();
        out.reserve(text.len());

        let mut last = 0;
        for link in self.finder.links(text) {
            let url = link.as_str();
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                continue;
            }
            if already_linked(text, link.start()) {
                continue;
            }

            out.push_str(&text[last..link.start()]);
            out.push('<');
            out.push_str(url);
            out.push('>');
            last = link.end();
        }
        out.push_str(&text[last..]);
    }
}

// `<url>` autolinks and `[text](url)` destinations.
fn already_linked(text: &str, start: usize) -> bool {
    let before = &text[..start];
    before.ends_with('<') || before.ends_with("](")
}
