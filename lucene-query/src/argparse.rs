use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lucene_query::{AnyClause, Clause, Operator, Phrase, Range, RangeType, RenderOptions, Term};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "lucy",
    about = "Render Lucene/Solr query clauses",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub modifiers: ModifierArgs,

    /// Pick which clause to render
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct ModifierArgs {
    /// Field to scope the clause to
    #[arg(long, global = true)]
    pub field: Option<String>,

    /// Boolean requirement: required, prohibited or optional
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub operator: Option<Operator>,

    /// Relevance weight
    #[arg(long, global = true)]
    pub boost: Option<f64>,

    /// Escape reserved query characters
    #[arg(long, global = true)]
    pub escape: bool,

    /// JSON file with render options
    #[arg(long, global = true)]
    pub options: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// A single token
    Term {
        text: String,
        /// Edit distance, 0 to 2
        #[arg(long, allow_hyphen_values = true)]
        fuzzy: Option<i64>,
    },
    /// Quoted multi-word text
    Phrase {
        text: String,
        /// How far apart the words may be
        #[arg(long)]
        slop: Option<u32>,
    },
    /// Bounded range; use * for an open end
    Range {
        #[arg(allow_hyphen_values = true)]
        lower: String,
        #[arg(allow_hyphen_values = true)]
        upper: String,
        /// inclusive or exclusive
        #[arg(long, default_value_t = RangeType::Inclusive)]
        range_type: RangeType,
    },
}

pub fn load_options(path: &Path) -> Result<RenderOptions> {
    let content = fs_err::read_to_string(path)
        .with_context(|| format!("Failed to read options file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse options file: {}", path.display()))
}

impl Cli {
    /// Options from the file, if any, with command-line flags on top
    pub fn render_options(&self) -> Result<RenderOptions> {
        let mut options = match &self.modifiers.options {
            Some(path) => load_options(path)?,
            None => RenderOptions::default(),
        };
        if self.modifiers.escape {
            options.escape_special_characters = true;
        }
        Ok(options)
    }

    pub fn build_clause(&self) -> Result<AnyClause> {
        let mut clause: AnyClause = match &self.command {
            Commands::Term { text, fuzzy } => {
                let mut term = Term::new(text)?;
                if let Some(distance) = fuzzy {
                    term.fuzzify(*distance)?;
                }
                term.into()
            }
            Commands::Phrase { text, slop } => {
                let mut phrase = Phrase::new(text.as_str());
                if let Some(distance) = slop {
                    phrase.set_proximity(*distance);
                }
                phrase.into()
            }
            Commands::Range {
                lower,
                upper,
                range_type,
            } => {
                let mut range = Range::new(lower.as_str(), upper.as_str());
                range.set_range_type(*range_type);
                range.into()
            }
        };

        if let Some(field) = &self.modifiers.field {
            clause.set_field(field.as_str());
        }
        if let Some(operator) = self.modifiers.operator {
            clause.set_operator(operator);
        }
        if let Some(weight) = self.modifiers.boost {
            clause.boost(weight)?;
        }
        tracing::debug!("Built {} clause", clause.kind());
        Ok(clause)
    }

    pub fn render(&self) -> Result<String> {
        let options = self.render_options()?;
        Ok(self.build_clause()?.render_with(&options))
    }
}
