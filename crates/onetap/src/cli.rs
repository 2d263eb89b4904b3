//! Clap derive structures for the `onetap` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// onetap -- everyday developer utilities in one binary
#[derive(Debug, Parser)]
#[command(
    name = "onetap",
    version,
    about = "Text, codec, and conversion utilities from the command line",
    long_about = "A single binary bundling the small tools developers reach for\n\
        every day: case conversion, Base64 and friends, JSON and CSS\n\
        formatting, hashes, UUIDs, color and unit conversion, date math,\n\
        subnets, and a desk calculator.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format (falls back to the configured default)
    #[arg(long, short = 'o', env = "ONETAP_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, env = "ONETAP_COLOR", global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

impl GlobalOpts {
    /// Output format after config defaults have been applied.
    pub fn output_format(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }

    /// Color mode after config defaults have been applied.
    pub fn color_mode(&self) -> ColorMode {
        self.color.clone().unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Transform and analyze text
    #[command(alias = "t")]
    Text(TextArgs),

    /// Encode text with a codec
    #[command(alias = "enc")]
    Encode(CodecArgs),

    /// Decode text with a codec
    #[command(alias = "dec")]
    Decode(CodecArgs),

    /// Format, minify, and validate structured documents
    #[command(alias = "fmt")]
    Format(FormatArgs),

    /// Generate passwords, identifiers, and placeholder data
    #[command(alias = "gen", alias = "g")]
    Generate(GenerateArgs),

    /// Compute cryptographic digests
    Hash(HashArgs),

    /// Build and inspect unsigned demo JWTs
    Jwt(JwtArgs),

    /// Convert a color between hex, RGB, and HSL
    Color(ColorArgs),

    /// Convert values between units
    #[command(alias = "conv")]
    Convert(ConvertArgs),

    /// Date and time calculators
    Date(DateArgs),

    /// Financial calculators
    #[command(alias = "fin")]
    Finance(FinanceArgs),

    /// Network address helpers
    Net(NetArgs),

    /// Evaluate an arithmetic expression
    Calc(CalcArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TEXT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TextArgs {
    #[command(subcommand)]
    pub command: TextCommand,
}

#[derive(Debug, Subcommand)]
pub enum TextCommand {
    /// Change the case style of text
    Case {
        /// Target case style
        style: CaseStyle,

        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Reverse the characters of text
    Reverse {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Collapse runs of whitespace into single spaces
    Clean {
        /// Remove all whitespace instead of collapsing
        #[arg(long, short = 'a')]
        all: bool,

        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Sort lines alphabetically
    Sort {
        /// Drop duplicate lines after sorting
        #[arg(long, short = 'u')]
        unique: bool,

        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Remove duplicate lines, keeping first occurrences
    Dedup {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Count words, characters, lines, and paragraphs
    Stats {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Extract emails, URLs, or numbers from text
    Extract {
        /// What to pull out
        target: ExtractTarget,

        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CaseStyle {
    /// ALL UPPERCASE
    Upper,
    /// all lowercase
    Lower,
    /// Title Case
    Title,
    /// camelCase
    Camel,
    /// snake_case
    Snake,
    /// kebab-case
    Kebab,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExtractTarget {
    /// Email addresses
    Emails,
    /// http/https URLs
    Urls,
    /// Runs of digits
    Numbers,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ENCODE / DECODE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CodecArgs {
    /// Codec to apply
    pub codec: CodecKind,

    /// Input text (reads stdin when omitted)
    pub text: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CodecKind {
    /// Base64 (standard alphabet, padded)
    #[value(alias = "b64")]
    Base64,
    /// URL percent-encoding
    Url,
    /// Space-separated 8-bit binary
    #[value(alias = "bin")]
    Binary,
    /// Space-separated lowercase hex bytes
    Hex,
    /// International Morse code
    Morse,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FORMAT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FormatArgs {
    #[command(subcommand)]
    pub command: FormatCommand,
}

#[derive(Debug, Subcommand)]
pub enum FormatCommand {
    /// Pretty-print, minify, or validate JSON
    Json {
        /// Minify instead of pretty-printing
        #[arg(long, conflicts_with = "validate")]
        minify: bool,

        /// Check syntax without emitting the document
        #[arg(long)]
        validate: bool,

        /// Input document (reads stdin when omitted)
        text: Option<String>,
    },

    /// Format or minify CSS
    Css {
        /// Minify instead of formatting
        #[arg(long)]
        minify: bool,

        /// Input stylesheet (reads stdin when omitted)
        text: Option<String>,
    },

    /// Escape or unescape HTML entities
    Html {
        /// Unescape entities instead of escaping
        #[arg(long, short = 'u')]
        unescape: bool,

        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Re-indent an XML document
    Xml {
        /// Input document (reads stdin when omitted)
        text: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GENERATE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    pub command: GenerateCommand,
}

#[derive(Debug, Subcommand)]
pub enum GenerateCommand {
    /// Generate a random password
    #[command(alias = "pw")]
    Password {
        /// Password length in characters
        #[arg(long, short = 'l', default_value = "16")]
        length: usize,

        /// Guarantee upper, lower, digit, and symbol characters
        #[arg(long)]
        strong: bool,
    },

    /// Generate random version 4 UUIDs
    Uuid {
        /// How many to generate
        #[arg(long, short = 'n', default_value = "1")]
        count: usize,
    },

    /// Generate lorem ipsum placeholder text
    Lorem {
        /// Number of sentences
        #[arg(long, short = 'n', default_value = "3")]
        sentences: usize,
    },

    /// Turn text into a URL-friendly slug
    Slug {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Generate a random integer in an inclusive range
    #[command(alias = "num")]
    Number {
        /// Lower bound
        #[arg(default_value = "1", allow_hyphen_values = true)]
        min: i64,

        /// Upper bound
        #[arg(default_value = "100", allow_hyphen_values = true)]
        max: i64,
    },

    /// Generate a five-color HSL palette
    Palette,

    /// Build a QR code image URL for the given data
    Qr {
        /// Data to encode
        data: String,

        /// Image width and height in pixels
        #[arg(long, short = 's', default_value = "200")]
        size: u32,
    },

    /// Build a Code 128 barcode image URL
    Barcode {
        /// Data to encode
        data: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  HASH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct HashArgs {
    /// Digest algorithm
    pub algorithm: DigestKind,

    /// Input text (reads stdin when omitted)
    pub text: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum DigestKind {
    /// SHA-1 (legacy, not collision resistant)
    Sha1,
    /// SHA-256
    Sha256,
    /// SHA-512
    Sha512,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  JWT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct JwtArgs {
    #[command(subcommand)]
    pub command: JwtCommand,
}

#[derive(Debug, Subcommand)]
pub enum JwtCommand {
    /// Build an unsigned demo token from a JSON payload
    Encode {
        /// JSON payload (reads stdin when omitted)
        payload: Option<String>,
    },

    /// Split a token and pretty-print its header and payload
    Decode {
        /// Token to inspect (reads stdin when omitted)
        token: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COLOR
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ColorArgs {
    /// Color in hex ("#1a2b3c") or RGB ("26, 43, 60") notation
    pub value: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONVERT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[command(subcommand)]
    pub command: ConvertCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConvertCommand {
    /// Convert a length measurement
    #[command(alias = "len")]
    Length {
        /// Value to convert
        value: f64,

        /// Unit to convert from
        from: LengthUnitKind,

        /// Unit to convert to
        to: LengthUnitKind,
    },

    /// Convert a weight measurement
    Weight {
        /// Value to convert
        value: f64,

        /// Unit to convert from
        from: WeightUnitKind,

        /// Unit to convert to
        to: WeightUnitKind,
    },

    /// Convert a temperature
    #[command(alias = "temp")]
    Temperature {
        /// Value to convert (negative values allowed)
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// Unit to convert from
        from: TemperatureUnitKind,

        /// Unit to convert to
        to: TemperatureUnitKind,
    },

    /// Convert between currencies at fixed demo rates
    #[command(alias = "cur")]
    Currency {
        /// Amount to convert
        value: f64,

        /// Currency to convert from
        from: CurrencyUnitKind,

        /// Currency to convert to
        to: CurrencyUnitKind,
    },

    /// Render a byte count as a human-readable size
    #[command(alias = "size")]
    FileSize {
        /// Size in bytes
        bytes: f64,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum LengthUnitKind {
    #[value(alias = "m")]
    Meters,
    #[value(alias = "ft")]
    Feet,
    #[value(alias = "in")]
    Inches,
    #[value(alias = "cm")]
    Centimeters,
    #[value(alias = "km")]
    Kilometers,
    #[value(alias = "mi")]
    Miles,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum WeightUnitKind {
    #[value(alias = "kg")]
    Kilograms,
    #[value(alias = "g")]
    Grams,
    #[value(alias = "lb")]
    Pounds,
    #[value(alias = "oz")]
    Ounces,
    #[value(alias = "st")]
    Stone,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TemperatureUnitKind {
    #[value(alias = "c")]
    Celsius,
    #[value(alias = "f")]
    Fahrenheit,
    #[value(alias = "k")]
    Kelvin,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CurrencyUnitKind {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DATE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DateArgs {
    #[command(subcommand)]
    pub command: DateCommand,
}

#[derive(Debug, Subcommand)]
pub enum DateCommand {
    /// Break a moment down into common representations
    Show {
        /// RFC 3339 timestamp, "YYYY-MM-DD [HH:MM:SS]", or unix seconds
        /// (defaults to now)
        instant: Option<String>,
    },

    /// Compute age and days until the next birthday
    Age {
        /// Birth date (YYYY-MM-DD)
        birth_date: String,
    },

    /// Count days between two dates
    Between {
        /// Start date (YYYY-MM-DD)
        start: String,

        /// End date (YYYY-MM-DD)
        end: String,
    },

    /// Add days to a date (negative to subtract)
    AddDays {
        /// Base date (YYYY-MM-DD)
        date: String,

        /// Days to add
        #[arg(allow_hyphen_values = true)]
        days: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FINANCE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FinanceArgs {
    #[command(subcommand)]
    pub command: FinanceCommand,
}

#[derive(Debug, Subcommand)]
pub enum FinanceCommand {
    /// Compound interest on a principal
    Compound {
        /// Starting principal
        principal: f64,

        /// Annual interest rate in percent
        rate: f64,

        /// Investment length in years
        years: f64,

        /// Compounding periods per year
        #[arg(long, short = 'n', default_value = "12")]
        frequency: u32,
    },

    /// Monthly payment for an amortized loan
    Loan {
        /// Loan principal
        principal: f64,

        /// Annual interest rate in percent
        rate: f64,

        /// Loan term in years
        years: u32,
    },

    /// Split a bill with tip
    Tip {
        /// Bill amount
        bill: f64,

        /// Tip rate in percent
        #[arg(long, short = 't', default_value = "15")]
        percent: f64,

        /// Ways to split the total
        #[arg(long, short = 'p', default_value = "1")]
        people: u32,
    },

    /// What percentage one value is of another
    #[command(alias = "pct")]
    Percentage {
        /// Part value
        part: f64,

        /// Total value
        total: f64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  NET
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct NetArgs {
    #[command(subcommand)]
    pub command: NetCommand,
}

#[derive(Debug, Subcommand)]
pub enum NetCommand {
    /// Classify an IP address
    #[command(alias = "ip")]
    CheckIp {
        /// IPv4 or IPv6 address
        address: String,
    },

    /// Describe an IPv4 subnet in CIDR notation
    Subnet {
        /// CIDR block, e.g. "192.168.1.0/24"
        cidr: String,
    },

    /// Look up well-known TCP/UDP ports
    Ports {
        /// Show only this port
        port: Option<u16>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CALC
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Expression to evaluate, e.g. "(2 + 3) * 4"
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Set a configuration value
    Set {
        /// Config key ("output" or "color")
        key: String,

        /// Value to set
        value: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
