// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! The command line interface for the rfg random file generator.

use clap::{error::ErrorKind, CommandFactory, Parser};
use log::debug;
use rfg::{
    cli::{exit_code, Cli, FailureClass},
    generator::generate_random_file,
    utils::{format_byte_size, seed_from_time},
};
use std::{
    io::{stdin, stdout, Write},
    process,
};

const LICENSE: &str = "rfg is licensed under the Apache License, Version 2.0.

  Licensed under the Apache License, Version 2.0 (the \"License\");
  you may not use this file except in compliance with the License.
  You may obtain a copy of the License at

      http://www.apache.org/licenses/LICENSE-2.0

  Unless required by applicable law or agreed to in writing, software
  distributed under the License is distributed on an \"AS IS\" BASIS,
  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
  See the License for the specific language governing permissions and
  limitations under the License.";

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => exit_code(FailureClass::BadArgument),
            };
            let _ = e.print();
            process::exit(code);
        },
    };

    if cli.version {
        println!("Random File Generator version {}", env!("CARGO_PKG_VERSION"));
        return;
    }
    if cli.license {
        println!("{}", LICENSE);
        return;
    }

    let request = match cli.generation_request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            let mut cmd = Cli::command();
            eprintln!("{}", cmd.render_help());
            process::exit(exit_code(FailureClass::BadArgument));
        },
    };
    let seed = cli.seed.unwrap_or_else(seed_from_time);
    debug!("Generation seed: {}", seed);

    println!("Welcome to Random File Generator");
    println!("Total File Size: {}", format_byte_size(request.size_in_bytes));
    println!("Creating file, Please wait...");
    if let Err(e) = generate_random_file(&request, seed) {
        eprintln!("Error: {:#}", e);
        process::exit(exit_code(FailureClass::Io));
    }
    println!("Random file has been generated and saved.");

    if cli.interactive {
        print!("Press enter to exit...");
        let _ = stdout().flush();
        let mut line = String::new();
        let _ = stdin().read_line(&mut line);
    }
}
