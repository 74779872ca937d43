// Runs the full handshake against the real backend and optionally searches.

use gpapi::{encrypt_password, ClientOptions, DeviceBuilder, GooglePlayClient, ProfileStore};

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 5 {
        eprintln!("usage: play <codename> <email> <ac2dm-token> <password> [query]");
        std::process::exit(1);
    }

    let store = ProfileStore::load_default().expect("bundled profiles are invalid");
    let profile = match store.get(&args[1]) {
        Ok(p) => p,
        Err(_) => {
            eprintln!("unknown device; available codenames:");
            for codename in store.codenames() {
                eprintln!("  {codename}");
            }
            std::process::exit(1);
        }
    };

    let device = DeviceBuilder::new(profile, "en_US", None).expect("bad locale or timezone");
    let mut client =
        GooglePlayClient::new(device, ClientOptions::default()).expect("transport setup failed");

    let gsf_id = client.checkin(&args[2], &args[3]).await.expect("checkin failed");
    println!("checked in, gsf id {gsf_id:x}");

    let encrypted = encrypt_password(&args[2], &args[4]).expect("password encryption failed");
    client
        .authenticate(&args[2], &encrypted)
        .await
        .expect("authentication failed");
    println!("authenticated");

    client
        .upload_device_config()
        .await
        .expect("device config upload failed");

    if let Some(query) = args.get(5) {
        let results = client.search(query).await.expect("search failed");
        for doc in results.doc {
            println!("{}\t{}", doc.docid(), doc.title());
        }
    }
}
