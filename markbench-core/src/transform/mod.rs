// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Transformation operations measured by the harness.
//!
//! The runner only ever sees the [`Transform`] trait. Concrete Markdown
//! converters live in the submodules and are picked by [`build_transform`].

mod autolink;
mod comrak_html;
mod pulldown_html;

pub use comrak_html::ComrakHtml;
pub use pulldown_html::PulldownCmarkHtml;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;
use crate::loader::InputBuffer;
use crate::sink::OutputSink;
use crate::types::ConverterKind;

/// A unit of work that consumes the input and appends to the sink.
///
/// Implementations must not keep references to either argument past the
/// call and must tolerate being invoked repeatedly against the same sink.
pub trait Transform {
    /// Short name used in logs and reports.
    fn name(&self) -> &str;

    /// Run one repetition.
    fn transform(&mut self, input: &InputBuffer, sink: &mut OutputSink)
        -> Result<(), TransformError>;
}

/// Optional Markdown syntax enabled for a converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownExtensions {
    pub strikethrough: bool,
    pub tasklists: bool,
    pub tables: bool,
    /// Turn bare http(s) URLs into links.
    pub autolink: bool,
}

/// Build the converter for `kind`.
pub fn build_transform(kind: ConverterKind, extensions: &MarkdownExtensions) -> Box<dyn Transform> {
    match kind {
        ConverterKind::PulldownCmark => Box::new(PulldownCmarkHtml::new(extensions)),
        ConverterKind::Comrak => Box::new(ComrakHtml::new(extensions)),
    }
}

/// Closure-backed transform.
pub struct FnTransform<F> {
    name: String,
    f: F,
}

/// Adapt a closure into a [`Transform`].
pub fn from_fn<F>(name: impl Into<String>, f: F) -> FnTransform<F>
where
    F: FnMut(&InputBuffer, &mut OutputSink) -> Result<(), TransformError>,
{
    FnTransform {
        name: name.into(),
        f,
    }
}

impl<F> Transform for FnTransform<F>
where
    F: FnMut(&InputBuffer, &mut OutputSink) -> Result<(), TransformError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(
        &mut self,
        input: &InputBuffer,
        sink: &mut OutputSink,
    ) -> Result<(), TransformError> {
        (self.f)(input, sink)
    }
}
