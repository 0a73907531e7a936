mod codegen;
mod config;
mod image;
mod layout;
mod options;
mod pack;
mod sort;
mod sprite;

use std::process;

use structopt::StructOpt;

use crate::options::Options;

fn main() {
    env_logger::init();

    let options = Options::from_args();

    match pack::pack(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {:?}", err);
            process::exit(1);
        }
    }
}
