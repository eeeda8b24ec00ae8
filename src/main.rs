mod args;
mod entry;
mod system;

use loadkit::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
