// crates/order-protocol/tests/text_parsing.rs
use order_core::{OrderError, Side};
use order_protocol::{parse_order_line, ProtocolError};

const DEFAULT: &str = "GOOG";

#[test]
fn four_fields_with_symbol() {
    let order = parse_order_line("B 100 50 GOOG", DEFAULT).unwrap().unwrap();
    assert_eq!(order.side, Side::Buy);
    assert_eq!(order.quantity, 100);
    assert_eq!(order.price, 50);
    assert_eq!(order.symbol, "GOOG");
}

#[test]
fn three_fields_use_default_symbol() {
    let order = parse_order_line("S 10 5", DEFAULT).unwrap().unwrap();
    assert_eq!(order.side, Side::Sell);
    assert_eq!(order.quantity, 10);
    assert_eq!(order.price, 5);
    assert_eq!(order.symbol, "GOOG");

    let order = parse_order_line("B 1 2", "MSFT").unwrap().unwrap();
    assert_eq!(order.symbol, "MSFT");
}

#[test]
fn blank_lines_yield_no_order() {
    for line in ["", "   \n", "\t", " \t \r\n"] {
        assert_eq!(parse_order_line(line, DEFAULT).unwrap(), None, "line {:?}", line);
    }
}

#[test]
fn arbitrary_whitespace_between_fields() {
    let order = parse_order_line("  B\t 7   \t 9  IBM \r\n", DEFAULT)
        .unwrap()
        .unwrap();
    assert_eq!(order.side, Side::Buy);
    assert_eq!(order.quantity, 7);
    assert_eq!(order.price, 9);
    assert_eq!(order.symbol, "IBM");
}

#[test]
fn wrong_field_count_is_malformed() {
    assert_eq!(
        parse_order_line("X 1 1 1 1", DEFAULT).unwrap_err(),
        ProtocolError::MalformedLine { tokens: 5 }
    );
    assert_eq!(
        parse_order_line("B 1", DEFAULT).unwrap_err(),
        ProtocolError::MalformedLine { tokens: 2 }
    );
    assert_eq!(
        parse_order_line("B", DEFAULT).unwrap_err(),
        ProtocolError::MalformedLine { tokens: 1 }
    );
}

#[test]
fn non_numeric_quantity_is_invalid_number() {
    assert_eq!(
        parse_order_line("B abc 5", DEFAULT).unwrap_err(),
        ProtocolError::InvalidNumber {
            field: "quantity",
            token: "abc".to_string(),
        }
    );
}

#[test]
fn price_must_be_plain_non_negative_u32() {
    for bad in ["-1", "+", "1.5", "4294967296", "0x10", "5e2"] {
        let line = format!("S 10 {}", bad);
        assert_eq!(
            parse_order_line(&line, DEFAULT).unwrap_err(),
            ProtocolError::InvalidNumber {
                field: "price",
                token: bad.to_string(),
            },
            "price {:?}",
            bad
        );
    }
}

#[test]
fn u32_bounds_are_accepted() {
    let order = parse_order_line("B 0 4294967295", DEFAULT).unwrap().unwrap();
    assert_eq!(order.quantity, 0);
    assert_eq!(order.price, u32::MAX);

    let order = parse_order_line("B 007 010", DEFAULT).unwrap().unwrap();
    assert_eq!(order.quantity, 7);
    assert_eq!(order.price, 10);
}

#[test]
fn leading_plus_sign_is_accepted() {
    let order = parse_order_line("B +5 10", DEFAULT).unwrap().unwrap();
    assert_eq!(order.quantity, 5);
    assert_eq!(order.price, 10);

    let order = parse_order_line("S 3 +0", DEFAULT).unwrap().unwrap();
    assert_eq!(order.price, 0);
}

#[test]
fn unrecognized_side_is_a_sell() {
    for side in ["b", "S", "X", "BUY", "sell", "?"] {
        let line = format!("{} 1 1", side);
        let order = parse_order_line(&line, DEFAULT).unwrap().unwrap();
        assert_eq!(order.side, Side::Sell, "side {:?}", side);
    }
}

#[test]
fn long_symbol_is_rejected_at_parse_time() {
    assert_eq!(
        parse_order_line("B 1 1 ABCDEFGH", DEFAULT).unwrap_err(),
        ProtocolError::InvariantViolation(OrderError::SymbolTooLong {
            symbol: "ABCDEFGH".to_string(),
            len: 8,
        })
    );

    // Default symbol goes through the same check.
    assert!(matches!(
        parse_order_line("B 1 1", "TOOLONGSYM").unwrap_err(),
        ProtocolError::InvariantViolation(_)
    ));
}

#[test]
fn quantity_checked_before_price() {
    assert_eq!(
        parse_order_line("B x y", DEFAULT).unwrap_err(),
        ProtocolError::InvalidNumber {
            field: "quantity",
            token: "x".to_string(),
        }
    );
}
