/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

api_enum! {
    /// Bar sizes accepted by `/iserver/marketdata/history`
    BarType {
        OneMinute => "1min",
        TwoMinute => "2min",
        ThreeMinute => "3min",
        FiveMinute => "5min",
        TenMinute => "10min",
        FifteenMinute => "15min",
        ThirtyMinute => "30min",
        OneHour => "1h",
        TwoHour => "2h",
        ThreeHour => "3h",
        FourHour => "4h",
        EightHour => "8h",
        OneDay => "1d",
        OneWeek => "1w",
        /// One month. Not to be confused with `1min`.
        OneMonth => "1m",
    }
}

api_enum! {
    /// Sort order for portfolio positions
    SortDirection {
        Ascending => "a",
        Descending => "d",
    }
}

api_enum! {
    /// Columns portfolio positions can be sorted on
    SortField {
        AccountId => "acctId",
        ContractId => "conid",
        ContractDescription => "contractDesc",
        Position => "position",
        MarketPrice => "mktPrice",
        MarketValue => "MktValue",
        Currency => "USD",
        AverageCost => "avgCost",
        AveragePrice => "avgPrice",
        RealizedPnl => "realizedPnl",
        UnrealizedPnl => "unrealizedPnl",
        Exchanges => "exchs",
        ExpirationDate => "expiry",
        PutOrCall => "putOrCall",
        Multiplier => "multiplier",
        Strike => "strike",
        ExerciseStyle => "exerciseStyle",
        AssetClass => "assetClass",
        Model => "model",
        UnderlyingContractId => "undConid",
        BaseMarketValue => "baseMktValue",
        BaseMarketPrice => "baseMktPrice",
        BaseAverageCost => "BaseAvgCost",
        BaseAveragePrice => "BaseAvgPrice",
        BaseRealizedPnl => "baseRealizedPnl",
        BaseUnrealizedPnl => "baseUnrealizedPnl",
    }
}

api_enum! {
    /// Frequency of cumulative performance data points
    Frequency {
        Daily => "D",
        Monthly => "M",
        Quarterly => "Q",
    }
}
