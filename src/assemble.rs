//! Document assembly.
//!
//! Builds the full AltaCV source by walking a fixed sequence of stages:
//!
//! ```text
//! Preamble → Header → LeftColumn → ColumnSwitch → RightColumn → Closing → Done
//! ```
//!
//! Each stage appends fragments to a single buffer owned by the
//! [`Assembler`]. There is no branching back and no partial output: the first
//! renderer error aborts assembly.
//!
//! The résumé passed in is expected to be normalized already
//! (see [`crate::normalize`]).

use crate::config::{Column, LayoutConfig};
use crate::render::{RenderError, render_section};
use crate::resume::Resume;
use crate::section::Block;

const PREAMBLE: &str = r"%% If you need to pass whatever options to xcolor
\PassOptionsToPackage{dvipsnames}{xcolor}
\documentclass[10pt,a4paper,ragged2e,withhyper]{altacv}

% Change the page layout if you need to
\geometry{left=1.25cm,right=1.25cm,top=1.5cm,bottom=1.5cm,columnsep=1.2cm}

\usepackage{paracol}

% Change the font if you want to, depending on whether
% you're using pdflatex or xelatex/lualatex
\ifxetexorluatex
    % If using xelatex or lualatex:
    \setmainfont{Roboto Slab}
    \setsansfont{Lato}
    \renewcommand{\familydefault}{\sfdefault}
\else
    % If using pdflatex:
    \usepackage[rm]{roboto}
    \usepackage[defaultsans]{lato}
    % \usepackage{sourcesanspro}
    \renewcommand{\familydefault}{\sfdefault}
\fi
";

const BASE_COLOR: &str = r"\definecolor{SlateGrey}{HTML}{2E2E2E}";

const FONTS_AND_MARKERS: &str = r"\renewcommand{\namefont}{\Huge\rmfamily\bfseries}
\renewcommand{\personalinfofont}{\small}
\renewcommand{\cvsectionfont}{\LARGE\rmfamily\bfseries}
\renewcommand{\cvsubsectionfont}{\large\bfseries}

\renewcommand{\itemmarker}{{\small\textbullet}}
\renewcommand{\ratingmarker}{\faCircle}

\begin{document}
";

/// Info fields AltaCV lacks out of the box, so profiles on these networks render.
const EXTRA_INFO_FIELDS: [&str; 2] = [
    r"  \NewInfoField{stackoverflow}{\faStackOverflow}[https://stackoverflow.com/users/]",
    r"  \NewInfoField{instagram}{\faInstagram}[https://www.instagram.com/]",
];

const COLUMN_SETUP: &str = r"\AtBeginEnvironment{itemize}{\small}
%% Set the left/right column width ratio to 6:4.
\columnratio{0.6}
\begin{paracol}{2}
";

const NEW_PAGE: &str = "\n\\newpage\n";
const SWITCH_COLUMN: &str = "\n\\switchcolumn\n";
const CLOSING: &str = "\n\\end{paracol}\n\\end{document}\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Preamble,
    Header,
    LeftColumn,
    ColumnSwitch,
    RightColumn,
    Closing,
    Done,
}

impl Stage {
    fn next(self) -> Stage {
        match self {
            Stage::Preamble => Stage::Header,
            Stage::Header => Stage::LeftColumn,
            Stage::LeftColumn => Stage::ColumnSwitch,
            Stage::ColumnSwitch => Stage::RightColumn,
            Stage::RightColumn => Stage::Closing,
            Stage::Closing | Stage::Done => Stage::Done,
        }
    }
}

/// The assembled document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub fragments: Vec<String>,
    /// Blocks rendered in the first column, in order.
    pub left: Vec<Block>,
    /// Blocks rendered in the second column, in order.
    pub right: Vec<Block>,
}

impl Document {
    /// Fragments joined with newlines.
    pub fn to_tex(&self) -> String {
        self.fragments.join("\n")
    }
}

pub struct Assembler<'a> {
    config: &'a LayoutConfig,
    resume: &'a Resume,
    stage: Stage,
    fragments: Vec<String>,
    left: Vec<Block>,
    right: Vec<Block>,
}

impl<'a> Assembler<'a> {
    pub fn new(config: &'a LayoutConfig, resume: &'a Resume) -> Self {
        Self {
            config,
            resume,
            stage: Stage::Preamble,
            fragments: Vec::new(),
            left: Vec::new(),
            right: Vec::new(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Run the current stage and move to the next one. No-op once `Done`.
    pub fn step(&mut self) -> Result<Stage, RenderError> {
        match self.stage {
            Stage::Preamble => self.preamble(),
            Stage::Header => self.header(),
            Stage::LeftColumn => self.column(Column::Left)?,
            Stage::ColumnSwitch => self.fragments.push(SWITCH_COLUMN.to_string()),
            Stage::RightColumn => self.column(Column::Right)?,
            Stage::Closing => self.fragments.push(CLOSING.to_string()),
            Stage::Done => {}
        }
        self.stage = self.stage.next();
        Ok(self.stage)
    }

    /// Run all remaining stages.
    pub fn finish(mut self) -> Result<Document, RenderError> {
        while self.stage != Stage::Done {
            self.step()?;
        }
        Ok(Document {
            fragments: self.fragments,
            left: self.left,
            right: self.right,
        })
    }

    fn preamble(&mut self) {
        self.fragments.push(PREAMBLE.to_string());
        self.fragments.push(BASE_COLOR.to_string());
        for (name, value) in &self.config.colors {
            self.fragments
                .push(format!("\\definecolor{{{name}Color}}{{HTML}}{{{value}}}"));
            self.fragments
                .push(format!("\\colorlet{{{name}}}{{{name}Color}}"));
        }
        self.fragments.push(FONTS_AND_MARKERS.to_string());
    }

    fn header(&mut self) {
        let basics = &self.resume.basics;
        let name = self.config.display_name().unwrap_or(&basics.name);

        self.fragments.push(format!("\n\\name{{{name}}}"));
        self.fragments.push(format!(
            "\\tagline{{{}}}",
            basics.label.as_deref().unwrap_or_default()
        ));
        self.fragments.push(r"\photoL{2.5cm}{photo}".to_string());
        self.fragments.push(format!(
            "\\personalinfo{{%\n  \\email{{{}}}\n  \\phone{{{}}}\n  \\location{{{}}}\n}}",
            basics.email,
            basics.phone,
            basics.location.display()
        ));

        self.fragments.push(r"\personalinfotwo{%".to_string());
        self.fragments
            .extend(EXTRA_INFO_FIELDS.iter().map(|f| f.to_string()));
        if let Some(website) = basics.website.as_deref().filter(|w| !w.is_empty()) {
            self.fragments.push(format!(
                "  \\homepage{{{}}}",
                website.replace("https://", "")
            ));
        }
        for profile in &basics.profiles {
            let command: String = profile
                .network
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            self.fragments
                .push(format!("  \\{command}{{{}}}", profile.username));
        }
        self.fragments.push("}".to_string());

        self.fragments.push(r"\makecvheader".to_string());
        self.fragments.push(COLUMN_SETUP.to_string());
    }

    fn column(&mut self, column: Column) -> Result<(), RenderError> {
        let composition = self.config.column(column);
        for block in composition.blocks {
            match block {
                Block::NewPage => self.fragments.push(NEW_PAGE.to_string()),
                Block::Section(section) => {
                    let rendered = render_section(section, self.resume, &self.config.strings)?;
                    tracing::debug!(%column, %section, fragments = rendered.len(), "rendered section");
                    self.fragments.extend(rendered);
                }
            }
            match column {
                Column::Left => self.left.push(block),
                Column::Right => self.right.push(block),
            }
        }
        Ok(())
    }
}

/// Assemble the whole document in one go.
pub fn assemble(config: &LayoutConfig, resume: &Resume) -> Result<Document, RenderError> {
    Assembler::new(config, resume).finish()
}
