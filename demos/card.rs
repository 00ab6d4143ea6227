use card417::{Bitmap, Digits, Symbol};

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";
const PADDING: usize = 4;

// Painted pixels are the light ones, as on the 1 bit displays the symbol was
// laid out for.
fn display_bitmap(bitmap: &Bitmap) {
    let width = bitmap.width() as usize;
    let quiet_zone_v = str::repeat(BLACK, width + PADDING * 2);
    let quiet_zone_h = &quiet_zone_v[..PADDING * BLACK.len()];

    println!("{quiet_zone_v}\n{quiet_zone_v}");
    for y in 0..bitmap.height() {
        print!("{quiet_zone_h}");
        for x in 0..bitmap.width() {
            print!("{}", if bitmap.pixel(x, y) { WHITE } else { BLACK });
        }
        println!("{quiet_zone_h}");
    }
    println!("{quiet_zone_v}\n{quiet_zone_v}\x1B[0m");
}

fn main() {
    env_logger::init();

    let input = std::env::args().nth(1).unwrap_or_else(|| "1234567812345678".to_owned());
    let digits: Digits = match input.parse() {
        Ok(digits) => digits,
        Err(err) => {
            eprintln!("{input}: {err}");
            std::process::exit(1);
        }
    };

    let symbol = Symbol::new(&digits);
    println!("card {digits:#}");
    for (row, columns) in symbol.matrix().iter().enumerate() {
        println!("row {row}: {columns:?}");
    }

    // one terminal cell per module, two cells per symbol row
    display_bitmap(&symbol.render().set_scale((1, 2)).to_bitmap());
}
