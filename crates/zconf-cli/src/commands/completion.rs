// Dweve ZCONF - Monitoring Configuration Expression Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion generation

use crate::error::CliError;
use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

/// Write a completion script for `cmd` to stdout.
pub fn generate_completion_for_command<G: Generator>(
    generator: G,
    cmd: &mut Command,
) -> Result<(), CliError> {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
    Ok(())
}

/// Installation instructions for the completion script of `shell`.
pub fn print_installation_instructions(shell: &str) -> String {
    match shell.to_lowercase().as_str() {
        "bash" => {
            r#"# Bash completion installation:

# For current session only:
eval "$(zconf completion bash)"

# Or save to completions directory:
zconf completion bash > ~/.local/share/bash-completion/completions/zconf
"#
        }
        "zsh" => {
            r#"# Zsh completion installation:

# Save to a directory in $fpath:
zconf completion zsh > ~/.zsh/completions/_zconf
"#
        }
        "fish" => {
            r#"# Fish completion installation:

zconf completion fish > ~/.config/fish/completions/zconf.fish
"#
        }
        "powershell" | "pwsh" => {
            r#"# PowerShell completion installation:

# Add this line to your profile ($PROFILE):
zconf completion powershell | Out-String | Invoke-Expression
"#
        }
        "elvish" => {
            r#"# Elvish completion installation:

# Add this line to ~/.elvish/rc.elv:
eval (zconf completion elvish)
"#
        }
        _ => "Unsupported shell",
    }
    .to_string()
}
