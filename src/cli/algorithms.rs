use crate::algorithm::Algorithm;

/// List supported algorithms with their parameters and defaults
pub fn list_algorithms() -> String {
    let mut output = String::new();

    output.push_str("Supported Algorithms\n");
    output.push_str("====================\n\n");

    for algorithm in Algorithm::ALL {
        output.push_str(&format!("{}\n", algorithm));
        output.push_str(&format!("  {}\n", algorithm.description()));
        match algorithm.parameter() {
            Some((name, default)) => {
                output.push_str(&format!("  Parameter: {} (default: {})\n", name, default))
            }
            None => output.push_str("  Parameter: none\n"),
        }
        output.push_str(&format!(
            "  Keeps case and punctuation: {}\n\n",
            if algorithm.preserves_shape() { "yes" } else { "no" }
        ));
    }

    output.push_str("Notes:\n");
    output.push_str("  Only the 26 letters A-Z are enciphered.\n");
    output.push_str("  Playfair and Hill may add X padding, shown as [PAD:...].\n");

    output
}
