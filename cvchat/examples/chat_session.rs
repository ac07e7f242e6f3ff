//! Chat over a pair of resumes using the CVChat engine
//!
//! # Usage
//!
//! ```bash
//! # Set environment variables
//! export OPENAI_API_KEY=sk-...
//! export CVCHAT_ASSISTANT_ID=asst_...
//! export ELASTICSEARCH_URL=http://localhost:9200
//! export MONGODB_URI=mongodb://localhost:27017
//!
//! # Run the example
//! cargo run --example chat_session -- resume-1 resume-2
//! ```

use cvchat::prelude::*;
use futures::StreamExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let openai_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY not set");
    let assistant_id =
        std::env::var("CVCHAT_ASSISTANT_ID").expect("CVCHAT_ASSISTANT_ID not set");
    let elasticsearch_url = std::env::var("ELASTICSEARCH_URL")
        .unwrap_or_else(|_| "http://localhost:9200".to_string());
    let mongodb_uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    let resume_ids: Vec<String> = std::env::args().skip(1).collect();
    if resume_ids.is_empty() {
        eprintln!("usage: chat_session <resume-id>...");
        std::process::exit(1);
    }

    println!("📦 Building session engine...");
    let engine = SessionBuilder::new()
        .openai_key(&openai_key)
        .assistant_id(&assistant_id)
        .elasticsearch(&elasticsearch_url)
        .mongodb(&mongodb_uri, "cvchat_example")
        .build()
        .await?;

    println!("🧵 Starting session over {} resume(s)...", resume_ids.len());
    let thread = engine.start_session(&resume_ids, "example session").await?;
    println!("✅ Thread {} ready!\n", thread.id);

    let questions = vec![
        "Summarize each candidate in one sentence.",
        "Who has the strongest backend experience?",
    ];

    for question in questions {
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("Question: {}", question);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let mut fragments = engine.send_message(&thread.id, question).await?;
        while let Some(fragment) = fragments.next().await {
            print!("{}", fragment?);
        }
        println!("\n");
    }

    println!("✨ Done!");

    Ok(())
}
