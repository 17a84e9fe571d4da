// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! pulldown-cmark converter streaming HTML straight into the sink.

use pulldown_cmark::{html, Options, Parser};

use super::autolink::Autolinker;
use super::{MarkdownExtensions, Transform};
use crate::error::TransformError;
use crate::loader::InputBuffer;
use crate::sink::OutputSink;

const NAME: &str = "pulldown-cmark";

/// pulldown-cmark parser plus its HTML writer.
pub struct PulldownCmarkHtml {
    options: Options,
    autolinker: Option<Autolinker>,
    /// Reused across calls when autolinking rewrites the input.
    scratch: String,
}

impl PulldownCmarkHtml {
    pub fn new(extensions: &MarkdownExtensions) -> Self {
        let mut options = Options::empty();
        if extensions.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if extensions.tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        if extensions.tables {
            options.insert(Options::ENABLE_TABLES);
        }

        Self {
            options,
            autolinker: extensions.autolink.then(Autolinker::new),
            scratch: String::new(),
        }
    }
}

impl Default for PulldownCmarkHtml {
    fn default() -> Self {
        Self::new(&MarkdownExtensions::default())
    }
}

impl Transform for PulldownCmarkHtml {
    fn name(&self) -> &str {
        NAME
    }

    fn transform(
        &mut self,
        input: &InputBuffer,
        sink: &mut OutputSink,
    ) -> Result<(), TransformError> {
        let mut text = input.as_str()?;

        if let Some(autolinker) = &self.autolinker {
            autolinker.rewrite_into(text, &mut self.scratch);
            text = self.scratch.as_str();
        }

        let parser = Parser::new_ext(text, self.options);
        html::write_html_io(sink, parser).map_err(|source| TransformError::Render {
            converter: NAME,
            source,
        })
    }
}
