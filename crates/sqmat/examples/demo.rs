use log::LevelFilter;
use sqmat::SquareMat;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .init();

    #[rustfmt::skip]
    let a = SquareMat::from_rows([
        [6.0,  1.0, 1.0],
        [4.0, -2.0, 5.0],
        [2.0,  8.0, 7.0],
    ])?;
    println!("matrix a:\n{a}\n");
    log::debug!("cell sum of a = {}", a.cell_sum());

    println!("determinant of a: {}\n", a.determinant());

    let b = &a * 2.0;
    println!("b = a * 2:\n{b}\n");

    let c = &a + &b;
    println!("c = a + b:\n{c}\n");

    println!("transpose of a:\n{}\n", a.transpose());

    let squared = a.pow(2)?;
    println!("a^2:\n{squared}");
    log::debug!("a^2 and a*a agree by cell sum: {}", squared == &a * &a);

    Ok(())
}
