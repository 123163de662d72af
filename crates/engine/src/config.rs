use crate::options::{OutputFormat, Statistic};
use derive_builder::Builder;
use std::path::PathBuf;

/// Which statistics were requested for this invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
#[builder(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Selection {
    pub bytes: bool,
    pub lines: bool,
    pub words: bool,
    pub characters: bool,
}

impl Selection {
    pub const fn all() -> Self {
        Self {
            bytes: true,
            lines: true,
            words: true,
            characters: true,
        }
    }

    pub const fn is_empty(&self) -> bool {
        !(self.bytes || self.lines || self.words || self.characters)
    }

    /// An empty selection means every statistic.
    #[must_use]
    pub const fn resolve(self) -> Self {
        if self.is_empty() { Self::all() } else { self }
    }

    pub const fn contains(&self, kind: Statistic) -> bool {
        match kind {
            Statistic::Bytes => self.bytes,
            Statistic::Lines => self.lines,
            Statistic::Words => self.words,
            Statistic::Characters => self.characters,
        }
    }

    /// Enabled statistics in output order.
    pub fn kinds(self) -> impl Iterator<Item = Statistic> {
        Statistic::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub path: PathBuf,
    #[builder(default = "Selection::all()")]
    pub selection: Selection,
    #[builder(default)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_resolves_to_all() {
        let resolved = Selection::default().resolve();
        assert_eq!(resolved, Selection::all());
        assert_eq!(resolved.kinds().collect::<Vec<_>>(), Statistic::ALL.to_vec());
    }

    #[test]
    fn explicit_selection_is_kept() {
        let selection = SelectionBuilder::default()
            .words(true)
            .build()
            .unwrap()
            .resolve();
        assert_eq!(selection.kinds().collect::<Vec<_>>(), vec![Statistic::Words]);
    }

    #[test]
    fn kinds_follow_output_order_not_request_order() {
        let selection = SelectionBuilder::default()
            .characters(true)
            .bytes(true)
            .lines(true)
            .build()
            .unwrap();
        assert_eq!(
            selection.kinds().collect::<Vec<_>>(),
            vec![Statistic::Bytes, Statistic::Lines, Statistic::Characters]
        );
    }

    #[test]
    fn builder_defaults_to_every_statistic() {
        let config = ConfigBuilder::default().path("a.txt").build().unwrap();
        assert_eq!(config.selection, Selection::all());
        assert_eq!(config.format, OutputFormat::Plain);
    }
}
