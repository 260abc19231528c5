use crate::cli::InstallArgs;
use crate::pipeline::{Pipeline, Step};

fn uninstall_command(args: &InstallArgs) -> String {
    format!("{} tool uninstall -g {}", args.toolchain, args.tool_name)
}

fn build_command(args: &InstallArgs) -> String {
    format!("{} build", args.toolchain)
}

fn install_command(args: &InstallArgs) -> String {
    format!(
        "{} tool install --global --add-source {} {}",
        args.toolchain, args.package_source, args.tool_name
    )
}

/// Uninstall (best effort), build, then install from the local feed.
pub fn reinstall_pipeline(args: &InstallArgs) -> Pipeline {
    Pipeline::new()
        .step(Step::tolerated(uninstall_command(args)))
        .step(Step::fatal(build_command(args)))
        .step(Step::fatal(install_command(args)))
}
