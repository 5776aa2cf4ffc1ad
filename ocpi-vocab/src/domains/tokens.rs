use crate::vocabulary::closed_domain;

closed_domain! {
    /// OCPI 12.4.4. `TokenType` enum
    pub enum TokenType: str {
        AdHocUser = "AD_HOC_USER" => "One time use Token ID generated by a server (or App.)",
        AppUser = "APP_USER"
            => "Token ID generated by a server (or App.) to identify a user of an App.",
        Other = "OTHER" => "Other type of token.",
        Rfid = "RFID" => "RFID Token.",
    }
}
