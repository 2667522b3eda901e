use clap::{ArgGroup, Args};

#[derive(Args)]
#[command(
    group(ArgGroup::new("freight_ref").required(true).args(["freight", "freight_alias"])),
    group(ArgGroup::new("target").required(true).args(["stage", "subscribers_of"])),
    after_help = "Examples:
  kargo promote --project=my-project --freight=abc123 --stage=qa
  kargo promote --project=my-project --freight-alias=wonky-wombat --subscribers-of=qa
  kargo config set-project my-project && kargo promote --freight=abc123 --stage=qa"
)]
pub(crate) struct PromoteArgs {
    /// The project the freight belongs to (defaults to the configured project)
    #[arg(long, short = 'p')]
    pub(crate) project: Option<String>,
    /// The name of the piece of freight to promote
    #[arg(long)]
    pub(crate) freight: Option<String>,
    /// The alias of the piece of freight to promote
    #[arg(long)]
    pub(crate) freight_alias: Option<String>,
    /// The stage to promote the freight to
    #[arg(long)]
    pub(crate) stage: Option<String>,
    /// The stage whose subscribers the freight should be promoted to
    #[arg(long)]
    pub(crate) subscribers_of: Option<String>,
    /// Output format: json|yaml|name (defaults to a summary line)
    #[arg(long, short = 'o', value_name = "FORMAT")]
    pub(crate) output: Option<String>,
}
