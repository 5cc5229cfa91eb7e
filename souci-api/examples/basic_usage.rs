//! Basic usage example for the query tokenizer

use souci_api::{tokenize_text, Config, Input, QueryTokenizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let words = ["小明", "硕士", "毕业", "北京", "大学", "北京大学", "清华", "清华大学"];

    // Method 1: Simplest usage with the convenience function
    println!("=== Method 1: Convenience Function ===");
    let tokens = tokenize_text("小明硕士毕业于北京大学", words)?;
    println!("{}", tokens.join("/"));

    // Method 2: Shared tokenizer with full output
    println!("\n=== Method 2: Tokenizer with Statistics ===");
    let tokenizer = QueryTokenizer::new(words)?;
    let output = tokenizer.tokenize(Input::from_text("小明硕士毕业于清华大学"))?;
    println!(
        "{} tokens from {} runes:",
        output.metadata.token_count, output.metadata.total_runes
    );
    for token in &output.tokens {
        println!("  {:>4}..{:<4} {}", token.offset, token.offset + token.len, token.text);
    }

    // Method 3: Custom configuration
    println!("\n=== Method 3: Custom Configuration ===");
    let tokenizer = QueryTokenizer::with_config(
        Config::builder()
            .words(words)
            .word("于")
            .hmm(false)
            .build()?,
    )?;
    println!("{}", tokenizer.tokenize_text("北京大学，清华大学").join("/"));

    // Method 4: Byte spans for index builders
    println!("\n=== Method 4: Byte Spans ===");
    let tokenizer = QueryTokenizer::new(words)?;
    for span in tokenizer.tokenize_spans("北京大学") {
        println!("  offset {} len {}", span.offset, span.len);
    }

    Ok(())
}
