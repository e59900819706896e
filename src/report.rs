use crate::engine::{Details, TransformResult};

/// Plain-text walkthrough of how a result was produced
pub fn walkthrough(result: &TransformResult) -> String {
    let mut output = String::new();
    let algorithm = result.details.algorithm();

    output.push_str(&format!("{} Walkthrough\n", algorithm));
    output.push_str(&format!("{}\n\n", "=".repeat(algorithm.tag().len() + 12)));

    match &result.details {
        Details::Caesar { shift, plaintext } => {
            output.push_str(&format!("Shift: {}\n", shift));
            output.push_str(&format!("Plaintext: {}\n", plaintext));
            output.push_str(&format!(
                "Each letter moves {} places along the alphabet (A becomes {}).\n",
                shift,
                crate::cipher::shift_letter('A', *shift)
            ));
        }
        Details::Mono { mapping, plaintext } => {
            output.push_str("Mapping:\n");
            output.push_str("  ABCDEFGHIJKLMNOPQRSTUVWXYZ\n");
            output.push_str(&format!("  {}\n", mapping));
            output.push_str(&format!("Plaintext: {}\n", plaintext));
        }
        Details::Playfair {
            cipher,
            grid,
            pairs,
            keyword,
            letters_only,
            ..
        } => {
            output.push_str(&format!("Keyword: {}\n\n", keyword));
            output.push_str("1. Grid (J merged into I):\n");
            for row in grid.rows() {
                let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
                output.push_str(&format!("  {}\n", cells.join(" ")));
            }
            output.push('\n');
            output.push_str(&format!("2. Letters only: {}\n", or_none(letters_only)));
            let digraphs: Vec<String> = pairs.iter().map(|p| p.iter().collect()).collect();
            output.push_str(&format!("   Digraphs: {}\n\n", or_none(&digraphs.join(" "))));
            output.push_str("3. Same row: take the letter to the right.\n");
            output.push_str("   Same column: take the letter below.\n");
            output.push_str("   Otherwise: swap columns across the rectangle.\n\n");
            output.push_str(&format!("Letters-only cipher: {}\n", or_none(cipher)));
        }
        Details::Hill {
            cipher,
            steps,
            key_matrix,
            determinant,
            invertible,
            letters_only,
            ..
        } => {
            let n = key_matrix.size();
            output.push_str(&format!("Key matrix ({}x{}):\n", n, n));
            for row in key_matrix.rows() {
                let cells: Vec<String> = row.iter().map(|v| format!("{:>2}", v)).collect();
                output.push_str(&format!("  [{}]\n", cells.join(" ")));
            }
            output.push_str(&format!(
                "Determinant mod 26: {} ({})\n\n",
                determinant,
                if *invertible { "invertible" } else { "NOT invertible" }
            ));
            output.push_str(&format!("1. Letters only: {}\n", or_none(letters_only)));
            output.push_str(&format!("   Padded with X to blocks of {}\n\n", n));
            output.push_str("2. Blocks:\n");
            for step in steps {
                let numeric: Vec<String> = step.numeric.iter().map(|v| v.to_string()).collect();
                output.push_str(&format!(
                    "  {} -> {} (numeric: {})\n",
                    step.block,
                    step.result,
                    numeric.join(", ")
                ));
            }
            output.push('\n');
            output.push_str(&format!("Padded cipher (letters only): {}\n", or_none(cipher)));
        }
        Details::Vigenere { key, plaintext } => {
            output.push_str(&format!("Key: {}\n", key));
            output.push_str(&format!("Plaintext: {}\n", plaintext));
            output.push_str("Each letter is shifted by the next key letter (A=0, B=1, ...).\n");
            output.push_str("Non-letters do not consume key letters.\n");
        }
        Details::Transposition {
            grid, order, key, ..
        } => {
            output.push_str(&format!("Key: {}\n\n", key));
            output.push_str("1. Grid:\n");
            for row in grid {
                let cells: String = row.iter().collect();
                output.push_str(&format!("  |{}|\n", cells));
            }
            output.push('\n');
            let order: Vec<String> = order.iter().map(|i| i.to_string()).collect();
            output.push_str(&format!("2. Column order: {}\n", or_none(&order.join(", "))));
        }
        Details::Otp { key_hex, plaintext } => {
            output.push_str(&format!("Plaintext: {}\n", plaintext));
            output.push_str(&format!("Key (hex): {}\n", or_none(key_hex)));
            output.push_str("Cipher bytes are plaintext bytes XOR key bytes.\n");
        }
    }

    output.push('\n');
    output.push_str(&format!("Ciphertext: {}\n", result.cipher));
    output
}

fn or_none(s: &str) -> &str {
    if s.is_empty() {
        "[none]"
    } else {
        s
    }
}
