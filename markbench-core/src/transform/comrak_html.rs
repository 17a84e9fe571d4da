// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! comrak CommonMark/GFM converter.

use super::{MarkdownExtensions, Transform};
use crate::error::TransformError;
use crate::loader::InputBuffer;
use crate::sink::OutputSink;

const NAME: &str = "comrak";

/// comrak renderer. Output is rendered to a string and then appended.
pub struct ComrakHtml {
    options: comrak::Options<'static>,
}

impl ComrakHtml {
    pub fn new(extensions: &MarkdownExtensions) -> Self {
        let mut options = comrak::Options::default();
        options.extension.strikethrough = extensions.strikethrough;
        options.extension.tasklist = extensions.tasklists;
        options.extension.table = extensions.tables;
        options.extension.autolink = extensions.autolink;

        Self { options }
    }
}

impl Default for ComrakHtml {
    fn default() -> Self {
        Self::new(&MarkdownExtensions::default())
    }
}

impl Transform for ComrakHtml {
    fn name(&self) -> &str {
        NAME
    }

    fn transform(
        &mut self,
        input: &InputBuffer,
        sink: &mut OutputSink,
    ) -> Result<(), TransformError> {
        let text = input.as_str()?;
        let html = comrak::markdown_to_html(text, &self.options);
        sink.push_str(&html);
        Ok(())
    }
}
