use growpack::{pow2, Block, Packer};

fn main() {
    env_logger::init();

    let sizes = [(128, 128), (64, 128), (64, 64), (64, 64), (32, 16), (16, 16)];
    let blocks = sizes
        .iter()
        .enumerate()
        .map(|(index, &size)| Block::new(size, index));

    let mut packer = Packer::new();
    packer.fit(blocks).expect("example sizes are small");

    let (width, height) = packer.size().unwrap_or((0, 0));
    println!(
        "Sheet is {}x{} (pow2 {}x{})",
        width,
        height,
        pow2(width),
        pow2(height)
    );

    for block in packer.blocks() {
        println!(
            "  #{} at {:?}, size {:?}",
            block.payload(),
            block.position(),
            block.size()
        );
    }
}
