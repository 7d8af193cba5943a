use smasm::{util, Compiler, Error};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.sm")]
    input: String,

    /// Output file
    #[clap(short, long, default_value = "main.sm.bin")]
    output: String,

    /// Dump assembled words
    #[clap(short, long)]
    dump: bool,

    /// Write label table as YAML
    #[clap(short, long)]
    symbols: Option<String>,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("SM Assembler");

    if let Err(err) = run(&args) {
        err.print_diag(&args.input);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    println!("1. Read File");
    println!("  < {}", args.input);
    let code = std::fs::read(&args.input).map_err(|e| Error::FileOpen(args.input.clone(), e))?;
    let code = trim_end(&code);

    println!("2. Compile");
    let asm = Compiler::new().run(code)?;
    println!("  - {} words, {} labels", asm.words.len(), asm.labels.len());

    println!("3. Write Binary");
    println!("  > {}", args.output);
    std::fs::write(&args.output, asm.to_bytes())
        .map_err(|e| Error::FileWrite(args.output.clone(), e))?;

    if let Some(path) = &args.symbols {
        println!("  > {}", path);
        let file = std::fs::File::create(path).map_err(|e| Error::FileCreate(path.clone(), e))?;
        serde_yaml::to_writer(file, &asm.labels)?;
    }

    if args.dump {
        util::print_dump(&asm);
    }
    Ok(())
}

// Editors leave a newline at the end of a file, which would otherwise be an
// empty trailing word.
fn trim_end(code: &[u8]) -> &[u8] {
    let len = code
        .iter()
        .rposition(|b| *b != b' ' && *b != b'\n')
        .map_or(0, |idx| idx + 1);
    &code[..len]
}

#[test]
fn test() {
    assert_eq!(trim_end(b"add nop \n\n"), b"add nop");
    assert_eq!(trim_end(b"\n"), b"");
    assert_eq!(trim_end(b"a\t"), b"a\t");
}
