use super::*;

pub(super) fn handle_p2p(args: P2pArgs) -> anyhow::Result<()> {
    let client = BybitP2pClient::new();
    let mut query = P2pQuery::new(args.token, args.currency, args.side.into());
    query.size = args.size;

    let offers = client.opportunities(&query)?;
    if offers.is_empty() {
        println!("No opportunities found.");
        return Ok(());
    }

    println!("P2P opportunities:\n");
    for offer in &offers {
        let methods: Vec<&str> = offer
            .pay_methods
            .iter()
            .map(|method| method.name.as_str())
            .collect();
        println!("Trader: {}", offer.nickname);
        println!("Price: {} {}", offer.price, offer.currency);
        println!("Quantity available: {} {}", offer.quantity, offer.token);
        println!("Payment methods: {}", methods.join(", "));
        println!("{}", "-".repeat(40));
    }
    Ok(())
}
