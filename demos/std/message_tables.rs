//! Walk the generated identity tables and resolve a few raw pairs.

use korri_ubx::protocol::{
    lookups::{MessageClass, NavId, CLASSES},
    transport::message_id::MessageId,
};

fn main() {
    println!("=== UBX Message Tables ===\n");

    println!("1. Known classes:");
    for class in CLASSES {
        println!(
            "  0x{:02X} {:<4} {:>2} ids  {}",
            class.class,
            class.name,
            class.messages.len(),
            class.description
        );
    }
    println!();

    println!("2. Typed identities:");
    let id = NavId::Velned;
    println!(
        "  {:?} -> {} (0x{:02X} 0x{:02X}): {}",
        id,
        id.message_id(),
        NavId::CLASS.as_u8(),
        id.as_u8(),
        id.description()
    );
    println!();

    println!("3. Resolving raw pairs:");
    for (class, msg) in [(0x06, 0x01), (0x06, 0x99), (0x99, 0x01)] {
        let id = MessageId::new(class, msg);
        let class_name = MessageClass::from_u8(class).map(MessageClass::name);
        println!(
            "  0x{class:02X} 0x{msg:02X} -> {id} (class: {class_name:?}, known: {})",
            id.is_known()
        );
    }
}
