/// Human-readable reasons for the gateway failure codes we see in practice.
///
/// Domain data, not presentation logic: the UI layer localizes and styles
/// these, the table only fixes the meaning of each code. Unknown codes fall
/// back to a generic reason instead of erroring.
pub fn failure_message(code: &str) -> &'static str {
    match code {
        "07" => "Transaction flagged as suspicious by the gateway",
        "09" => "Card or account is not registered for online banking",
        "10" => "Card or account verification failed more than 3 times",
        "11" => "Payment window expired before the transaction completed",
        "12" => "Card or account is locked",
        "13" => "Incorrect one-time password",
        "24" => "Transaction cancelled by the customer",
        "51" => "Insufficient funds in the account",
        "65" => "Account exceeded its daily transaction limit",
        "75" => "Issuing bank is under maintenance",
        "79" => "Payment password entered incorrectly too many times",
        _ => "Payment failed; please try again or contact the dealership",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_have_specific_reasons() {
        assert!(failure_message("24").contains("cancelled"));
        assert!(failure_message("51").contains("Insufficient"));
        assert!(failure_message("75").contains("maintenance"));
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(failure_message("99"), failure_message("does-not-exist"));
    }
}
