use super::*;

use kargo::model::PromoteOptions;

pub(super) fn handle_promote_command(globals: &Globals, args: PromoteArgs) -> Result<()> {
    let cfg = globals.store.load()?;

    let opts = PromoteOptions {
        project: args
            .project
            .or_else(|| cfg.default_project().map(str::to_string))
            .unwrap_or_default(),
        freight_name: args.freight.unwrap_or_default(),
        freight_alias: args.freight_alias.unwrap_or_default(),
        target_stage: args.stage.unwrap_or_default(),
        subscribers_of_stage: args.subscribers_of.unwrap_or_default(),
        output_format: args.output,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    kargo::promote::run(
        &globals.call_context(),
        &opts,
        || require_client(globals, &cfg),
        &mut out,
    )
}
