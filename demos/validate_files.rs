use formguard::utils::format_size;
use formguard::{inspect_files, FormDraft, UploadPolicy};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional policy file, otherwise the built-in limits
    let policy = match env::var("FORMGUARD_POLICY") {
        Ok(path) => UploadPolicy::load(path).await?,
        Err(_) => UploadPolicy::default(),
    };

    println!(
        "Accepting up to {} files of at most {} ({})",
        policy.max_count(),
        format_size(policy.max_size_bytes()),
        policy
            .allowed_types()
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    );

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        println!("Usage: validate_files <file>...");
        return Ok(());
    }

    let mut draft = FormDraft::new();
    for (path, inspected) in paths.iter().zip(inspect_files(&paths, 5).await) {
        let candidate = match inspected {
            Ok(candidate) => candidate,
            Err(e) => {
                println!("- {path}: {e}");
                continue;
            }
        };

        let size = format_size(candidate.size);
        match draft.add_image(&policy, candidate) {
            Ok(_) => println!("- {path}: accepted ({size})"),
            Err(rejection) => println!("- {path}: rejected, {rejection}"),
        }
    }

    println!(
        "{} attached, {} slot(s) left",
        draft.images().len(),
        draft.remaining_slots(&policy)
    );

    Ok(())
}
