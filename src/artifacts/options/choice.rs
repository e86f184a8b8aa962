//! Enumerated generator settings
//!
//! Values are matched case-insensitively against the lookup tables below.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessModifier {
    #[default]
    Public,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indenting {
    #[default]
    Spaces,
    Tabs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    CrLf,
    #[default]
    Lf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashLength {
    #[default]
    Short,
    Long,
}

const ACCESS_MODIFIERS: phf::Map<&'static str, AccessModifier> = phf::phf_map! {
    "public" => AccessModifier::Public,
    "internal" => AccessModifier::Internal,
};

const INDENTINGS: phf::Map<&'static str, Indenting> = phf::phf_map! {
    "space" => Indenting::Spaces,
    "spaces" => Indenting::Spaces,
    "tab" => Indenting::Tabs,
    "tabs" => Indenting::Tabs,
};

const LINE_ENDINGS: phf::Map<&'static str, LineEnding> = phf::phf_map! {
    "crlf" => LineEnding::CrLf,
    "lf" => LineEnding::Lf,
};

const HASH_LENGTHS: phf::Map<&'static str, HashLength> = phf::phf_map! {
    "short" => HashLength::Short,
    "long" => HashLength::Long,
};

fn lookup<T: Copy>(table: &phf::Map<&'static str, T>, value: &str) -> Option<T> {
    table.get(value.to_ascii_lowercase().as_str()).copied()
}

impl AccessModifier {
    pub const ALLOWED: &'static str = "'public' or 'internal'";

    pub fn try_parse(value: &str) -> Option<Self> {
        lookup(&ACCESS_MODIFIERS, value)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Internal => "internal",
        }
    }
}

impl Indenting {
    pub const ALLOWED: &'static str = "'space', 'spaces', 'tab' or 'tabs'";

    pub fn try_parse(value: &str) -> Option<Self> {
        lookup(&INDENTINGS, value)
    }

    pub fn unit(&self) -> char {
        match self {
            Indenting::Spaces => ' ',
            Indenting::Tabs => '\t',
        }
    }
}

impl LineEnding {
    pub const ALLOWED: &'static str = "'crlf' or 'lf'";

    pub fn try_parse(value: &str) -> Option<Self> {
        lookup(&LINE_ENDINGS, value)
    }

    pub fn terminator(&self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

impl HashLength {
    pub const ALLOWED: &'static str = "'short' or 'long'";

    pub fn try_parse(value: &str) -> Option<Self> {
        lookup(&HASH_LENGTHS, value)
    }

    /// `git log --pretty` format selecting the abbreviated or full hash
    pub fn pretty_format(&self) -> &'static str {
        match self {
            HashLength::Short => "format:%h",
            HashLength::Long => "format:%H",
        }
    }
}
