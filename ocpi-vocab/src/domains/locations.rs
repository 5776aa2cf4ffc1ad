use crate::vocabulary::closed_domain;

closed_domain! {
    /// OCPI 8.4.3. `Capability` enum: functionality an EVSE offers.
    pub enum Capability: str {
        ChargingProfileCapable = "CHARGING_PROFILE_CAPABLE" => "The EVSE supports charging profiles.",
        ChargingPreferencesCapable = "CHARGING_PREFERENCES_CAPABLE"
            => "The EVSE supports charging preferences.",
        ChipCardSupport = "CHIP_CARD_SUPPORT" => "EVSE has a payment terminal that supports chip cards.",
        ContactlessCardSupport = "CONTACTLESS_CARD_SUPPORT"
            => "EVSE has a payment terminal that supports contactless cards.",
        CreditCardPayable = "CREDIT_CARD_PAYABLE"
            => "EVSE has a payment terminal that makes it possible to pay for charging using a credit card.",
        DebitCardPayable = "DEBIT_CARD_PAYABLE"
            => "EVSE has a payment terminal that makes it possible to pay for charging using a debit card.",
        PedTerminal = "PED_TERMINAL" => "EVSE has a payment terminal with a pin-code entry device.",
        RemoteStartStopCapable = "REMOTE_START_STOP_CAPABLE"
            => "The EVSE can remotely be started/stopped.",
        Reservable = "RESERVABLE" => "The EVSE can be reserved.",
        RfidReader = "RFID_READER" => "Charging at this EVSE can be authorized with an RFID token.",
        StartSessionConnectorRequired = "START_SESSION_CONNECTOR_REQUIRED"
            => "When a StartSession is sent to this EVSE, the MSP is required to add the optional connector_id field in the StartSession object.",
        TokenGroupCapable = "TOKEN_GROUP_CAPABLE"
            => "This EVSE supports token groups, two or more tokens work as one, so that a session can be started with one token and stopped with another.",
        UnlockCapable = "UNLOCK_CAPABLE"
            => "Connectors have mechanical lock that can be requested by the eMSP to be unlocked.",
    }
}

closed_domain! {
    /// OCPI 8.4.4. `ConnectorFormat` enum
    pub enum ConnectorFormat: str {
        Socket = "SOCKET" => "The connector is a socket; the EV user needs to bring a fitting plug.",
        Cable = "CABLE"
            => "The connector is an attached cable; the EV users car needs to have a fitting inlet.",
    }
}

closed_domain! {
    /// OCPI 8.4.5. `ConnectorType` enum
    pub enum ConnectorType: str {
        Chademo = "CHADEMO" => "The connector type is CHAdeMO, DC",
        Chaoji = "CHAOJI" => "The ChaoJi connector.",
        DomesticA = "DOMESTIC_A" => "Standard/Domestic household, type \"A\", NEMA 1-15, 2 pins",
        DomesticB = "DOMESTIC_B" => "Standard/Domestic household, type \"B\", NEMA 5-15, 3 pins",
        DomesticC = "DOMESTIC_C" => "Standard/Domestic household, type \"C\", CEE 7/17, 2 pins",
        DomesticD = "DOMESTIC_D" => "Standard/Domestic household, type \"D\", 3 pin",
        DomesticE = "DOMESTIC_E" => "Standard/Domestic household, type \"E\", CEE 7/5 3 pins",
        DomesticF = "DOMESTIC_F" => "Standard/Domestic household, type \"F\", CEE 7/4, Schuko, 3 pins",
        DomesticG = "DOMESTIC_G"
            => "Standard/Domestic household, type \"G\", BS 1363, Commonwealth, 3 pins",
        DomesticH = "DOMESTIC_H" => "Standard/Domestic household, type \"H\", SI-32, 3 pins",
        DomesticI = "DOMESTIC_I" => "Standard/Domestic household, type \"I\", AS 3112, 3 pins",
        DomesticJ = "DOMESTIC_J" => "Standard/Domestic household, type \"J\", SEV 1011, 3 pins",
        DomesticK = "DOMESTIC_K" => "Standard/Domestic household, type \"K\", DS 60884-2-D1, 3 pins",
        DomesticL = "DOMESTIC_L" => "Standard/Domestic household, type \"L\", CEI 23-16-VII, 3 pins",
        DomesticM = "DOMESTIC_M" => "Standard/Domestic household, type \"M\", BS 546, 3 pins",
        DomesticN = "DOMESTIC_N" => "Standard/Domestic household, type \"N\", NBR 14136, 3 pins",
        DomesticO = "DOMESTIC_O" => "Standard/Domestic household, type \"O\", TIS 166-2549, 3 pins",
        GbtAc = "GBT_AC" => "Guobiao GB/T 20234.2 AC socket/connector",
        GbtDc = "GBT_DC" => "Guobiao GB/T 20234.3 DC connector",
        Iec60309_2Single16 = "IEC_60309_2_single_16"
            => "IEC 60309-2 Industrial Connector single phase 16 amperes (usually blue)",
        Iec60309_2Three16 = "IEC_60309_2_three_16"
            => "IEC 60309-2 Industrial Connector three phases 16 amperes (usually red)",
        Iec60309_2Three32 = "IEC_60309_2_three_32"
            => "IEC 60309-2 Industrial Connector three phases 32 amperes (usually red)",
        Iec60309_2Three64 = "IEC_60309_2_three_64"
            => "IEC 60309-2 Industrial Connector three phases 64 amperes (usually red)",
        Iec62196T1 = "IEC_62196_T1" => "IEC 62196 Type 1 \"SAE J1772\"",
        Iec62196T1Combo = "IEC_62196_T1_COMBO" => "Combo Type 1 based, DC",
        Iec62196T2 = "IEC_62196_T2" => "IEC 62196 Type 2 \"Mennekes\"",
        Iec62196T2Combo = "IEC_62196_T2_COMBO" => "Combo Type 2 based, DC",
        Iec62196T3A = "IEC_62196_T3A" => "IEC 62196 Type 3A",
        Iec62196T3C = "IEC_62196_T3C" => "IEC 62196 Type 3C \"Scame\"",
        Nema5_20 = "NEMA_5_20" => "NEMA 5-20, 3 pins",
        Nema6_30 = "NEMA_6_30" => "NEMA 6-30, 3 pins",
        Nema6_50 = "NEMA_6_50" => "NEMA 6-50, 3 pins",
        Nema10_30 = "NEMA_10_30" => "NEMA 10-30, 3 pins",
        Nema10_50 = "NEMA_10_50" => "NEMA 10-50, 3 pins",
        Nema14_30 = "NEMA_14_30" => "NEMA 14-30, 3 pins, rating of 30 A",
        Nema14_50 = "NEMA_14_50" => "NEMA 14-50, 3 pins, rating of 50 A",
        PantographBottomUp = "PANTOGRAPH_BOTTOM_UP"
            => "On-board Bottom-up-Pantograph typically for bus charging",
        PantographTopDown = "PANTOGRAPH_TOP_DOWN"
            => "Off-board Top-down-Pantograph typically for bus charging",
        TeslaR = "TESLA_R" => "Tesla Connector \"Roadster\"-type (round, 4 pin)",
        TeslaS = "TESLA_S" => "Tesla Connector \"Model-S\"-type (oval, 5 pin)",
    }
}

closed_domain! {
    /// OCPI 8.4.8. `EnergySourceCategory` enum
    pub enum EnergySourceCategory: str {
        Nuclear = "NUCLEAR" => "Nuclear power sources.",
        GeneralFossil = "GENERAL_FOSSIL" => "All kinds of fossil power sources.",
        Coal = "COAL" => "Fossil power from coal.",
        Gas = "GAS" => "Fossil power from gas.",
        GeneralGreen = "GENERAL_GREEN" => "All kinds of regenerative power sources.",
        Solar = "SOLAR" => "Regenerative power from PV.",
        Wind = "WIND" => "Regenerative power from wind turbines.",
        Water = "WATER" => "Regenerative power from water turbines.",
    }
}

closed_domain! {
    /// OCPI 8.4.10. `EnvironmentalImpactCategory` enum
    pub enum EnvironmentalImpactCategory: str {
        NuclearWaste = "NUCLEAR_WASTE" => "Produced nuclear waste in grams per kilowatthour.",
        CarbonDioxide = "CARBON_DIOXIDE" => "Exhausted carbon dioxide in grams per kilowatthour.",
    }
}

closed_domain! {
    /// OCPI 8.4.12. `Facility` enum: facilities near a location.
    pub enum Facility: str {
        Hotel = "HOTEL" => "A hotel.",
        Restaurant = "RESTAURANT" => "A restaurant.",
        Cafe = "CAFE" => "A cafe.",
        Mall = "MALL" => "A mall or shopping center.",
        Supermarket = "SUPERMARKET" => "A supermarket.",
        Sport = "SPORT" => "Sport facilities: gym, field etc.",
        RecreationArea = "RECREATION_AREA" => "A recreation area.",
        Nature = "NATURE" => "Located in, or close to, a park, nature reserve etc.",
        Museum = "MUSEUM" => "A museum.",
        BikeSharing = "BIKE_SHARING" => "A bike/e-bike/e-scooter sharing location.",
        BusStop = "BUS_STOP" => "A bus stop.",
        TaxiStand = "TAXI_STAND" => "A taxi stand.",
        TramStop = "TRAM_STOP" => "A tram stop/station.",
        MetroStation = "METRO_STATION" => "A metro station.",
        TrainStation = "TRAIN_STATION" => "A train station.",
        Airport = "AIRPORT" => "An airport.",
        ParkingLot = "PARKING_LOT" => "A parking lot.",
        CarpoolParking = "CARPOOL_PARKING" => "A carpool parking.",
        FuelStation = "FUEL_STATION" => "A Fuel station.",
        Wifi = "WIFI" => "Wifi or other type of internet available.",
    }
}

closed_domain! {
    /// OCPI 8.4.16. `ImageCategory` enum
    pub enum ImageCategory: str {
        Charger = "CHARGER" => "Photo of the physical device that contains one or more EVSEs.",
        Entrance = "ENTRANCE" => "Location entrance photo.",
        Location = "LOCATION" => "Location overview photo.",
        Network = "NETWORK" => "Logo of an associated roaming network.",
        Operator = "OPERATOR" => "Logo of the charge point operator.",
        Other = "OTHER",
        Owner = "OWNER" => "Logo of the charge point owner.",
    }
}

closed_domain! {
    /// OCPI 8.4.17. `ParkingRestriction` enum
    pub enum ParkingRestriction: str {
        EvOnly = "EV_ONLY" => "Reserved parking spot for electric vehicles.",
        Plugged = "PLUGGED" => "Parking is only allowed while plugged in (charging).",
        Disabled = "DISABLED" => "Reserved parking spot for disabled people with valid ID.",
        Customers = "CUSTOMERS"
            => "Parking spot for customers/guests only, for example in case of a hotel or shop.",
        Motorcycles = "MOTORCYCLES"
            => "Parking spot only suitable for (electric) motorcycles or scooters.",
    }
}

closed_domain! {
    /// OCPI 8.4.18. `ParkingType` enum
    pub enum ParkingType: str {
        AlongMotorway = "ALONG_MOTORWAY"
            => "Location on a parking facility/rest area along a motorway, freeway, interstate, highway etc.",
        ParkingGarage = "PARKING_GARAGE" => "Multistorey car park.",
        ParkingLot = "PARKING_LOT"
            => "A cleared area that is intended for parking vehicles, i.e. at super markets, bars, etc.",
        OnDriveway = "ON_DRIVEWAY" => "Location is on the driveway of a house/building.",
        OnStreet = "ON_STREET" => "Parking in public space along a street.",
        UndergroundGarage = "UNDERGROUND_GARAGE" => "Multistorey car park, mainly underground.",
    }
}

closed_domain! {
    /// OCPI 8.4.19. `PowerType` enum
    pub enum PowerType: str {
        Ac1Phase = "AC_1_PHASE" => "AC single phase.",
        Ac2Phase = "AC_2_PHASE" => "AC two phases, only two of the three available phases connected.",
        Ac2PhaseSplit = "AC_2_PHASE_SPLIT" => "AC two phases using split phase system.",
        Ac3Phase = "AC_3_PHASE" => "AC three phases.",
        Dc = "DC" => "Direct Current.",
    }
}

closed_domain! {
    /// OCPI 8.4.22. `Status` enum: the status of an EVSE or connector.
    pub enum Status: str {
        Available = "AVAILABLE" => "The EVSE/Connector is able to start a new charging session.",
        Blocked = "BLOCKED"
            => "The EVSE/Connector is not accessible because of a physical barrier, i.e. a car.",
        Charging = "CHARGING" => "The EVSE/Connector is in use.",
        Inoperative = "INOPERATIVE"
            => "The EVSE/Connector is not yet active, or temporarily not available for use, but not broken or defect.",
        OutOfOrder = "OUTOFORDER"
            => "The EVSE/Connector is currently out of order, some part/components may be broken/defect.",
        Planned = "PLANNED" => "The EVSE/Connector is planned, will be operating soon.",
        Removed = "REMOVED" => "The EVSE/Connector was discontinued/removed.",
        Reserved = "RESERVED"
            => "The EVSE/Connector is reserved for a particular EV driver and is unavailable for other drivers.",
        Unknown = "UNKNOWN" => "No status information available (also used when offline).",
    }
}
