use anyhow::Result;
use chrono::Local;
use sms_triage::{
    models::SmsMessage,
    search,
    Classifier, OtpExtractor,
};

fn main() -> Result<()> {
    println!("Testing SMS triage functionality...");

    let classifier = Classifier::new()?;
    let extractor = OtpExtractor::new()?;

    // Sample inbox: regulated headers, short codes, and real phone numbers
    let now = Local::now();
    let messages = vec![
        SmsMessage {
            sender: "VM-HDFCBK-T".to_string(),
            timestamp: now,
            body: "Rs.2,500 debited from a/c **3456 via UPI. Balance: Rs.18,200".to_string(),
        },
        SmsMessage {
            sender: "AD-MYNTRA-P".to_string(),
            timestamp: now,
            body: "FLAT 60% OFF! Biggest sale of the season ends tonight. Shop now".to_string(),
        },
        SmsMessage {
            sender: "JX-IRCTC".to_string(),
            timestamp: now,
            body: "Your booking PNR 452187 is confirmed. Ticket sent via email".to_string(),
        },
        SmsMessage {
            sender: "567678".to_string(),
            timestamp: now,
            body: "Your OTP is 482910, valid for 5 min. Do not share it with anyone".to_string(),
        },
        SmsMessage {
            sender: "+919876543210".to_string(),
            timestamp: now,
            body: "Running late, see you at the station in 20".to_string(),
        },
    ];

    println!("\nSender classification:");
    for message in &messages {
        let category = classifier.classify(&message.sender, &[message.body.clone()]);
        println!("{} -> {}", message.sender, category);
    }

    println!("\nOTP extraction:");
    for message in &messages {
        if let Some(code) = extractor.extract(&message.body) {
            println!("{}: {}", message.sender, code);
        }
    }

    println!("\nSearch for 'booking':");
    for result in search::search(&messages, "booking") {
        println!("{:.1}  {} - {}", result.score, result.message.sender, result.message.body);
    }

    println!("\nDemo completed successfully!");
    Ok(())
}
