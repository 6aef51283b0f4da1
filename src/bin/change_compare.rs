use coinchange::compare::{render_table, run, HarnessConfig};
use coinchange::Denominations;

fn main() {
    let config = HarnessConfig::default();
    let rows = run(&Denominations::canonical(), &config);
    print!("{}", render_table(&rows));
}
