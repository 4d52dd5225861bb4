mod generate;
mod print;

use crate::Cli;
use crate::CommandResult;
pub(crate) use generate::GenerateCmd;
pub(crate) use print::PrintCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-querygen")]
pub(crate) enum CommandEnum {
    Generate(Box<GenerateCmd>),
    Print(Box<PrintCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
        }
    }
}
