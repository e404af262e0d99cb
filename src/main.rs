use anyhow::Context;
use bpaf::Bpaf;

#[derive(Debug, Clone, Bpaf)]
#[bpaf(options)]
/// Decompresses a zstd compressed file into a buffer of a known size.
struct Args {
    /// Compressed input file.
    #[bpaf(positional("INPUT"))]
    input: std::path::PathBuf,

    /// Destination of the decompressed data.
    #[bpaf(positional("OUTPUT"))]
    output: std::path::PathBuf,

    /// Size of the decompressed data in bytes.
    #[bpaf(positional("SIZE"))]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    let args = args().run();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let input = zstd_decompress::read_input(&args.input)?;
    let mut output = zstd_decompress::allocate(args.size)?;

    let outcome =
        zstd_decompress::decompress_with(&zstd_decompress::Zstd, &input, &mut output, None);
    println!("result: {outcome}");

    let n = outcome
        .into_result()
        .with_context(|| format!("failed to decompress '{}'", args.input.display()))?;
    output.truncate(n.get());

    zstd_decompress::write_output(&args.output, &output)?;

    Ok(())
}
