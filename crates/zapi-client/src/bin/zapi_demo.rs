//! Small command-line probe for a Z-API instance.
//!
//! Reads `ZAPI_INSTANCE_ID` / `ZAPI_TOKEN_ID` from the environment.
//! Built only with `--features cli`.
//!
//! ```text
//! zapi-demo                          # instance status
//! zapi-demo send-text <phone> <msg>  # send a text message
//! zapi-demo queue                    # list the send queue
//! ```

use zapi_client::{ZApi, ZApiResult};

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

const USAGE: &str = "usage: zapi-demo [status | send-text <phone> <message> | queue]";

async fn run(args: &[String]) -> ZApiResult<String> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let known = matches!(
        args.as_slice(),
        [] | ["status"] | ["queue"] | ["send-text", _, _, ..]
    );
    if !known {
        return Ok(USAGE.to_string());
    }

    let zapi = ZApi::from_env()?;
    let resp = match args.as_slice() {
        ["send-text", phone, message @ ..] => {
            zapi.messaging().send_text(phone, &message.join(" ")).await?
        }
        ["queue"] => zapi.queue().queue().await?,
        _ => zapi.instance().status().await?,
    };

    Ok(serde_json::to_string_pretty(&resp).unwrap_or_else(|_| resp.to_string()))
}
