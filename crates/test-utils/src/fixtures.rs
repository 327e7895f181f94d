//! Common test fixtures for PET estimation tests.
//!
//! This module provides pre-defined test data that represents common
//! scenarios: well-known locations, survey point files, and KMA open API
//! payloads as returned by the live service.

/// Well-known locations as (lat, lon) in decimal degrees.
pub mod places {
    /// Seoul City Hall, KMA cell (60, 127)
    pub const SEOUL: (f64, f64) = (37.5665, 126.9780);

    /// Busan City Hall, KMA cell (98, 76)
    pub const BUSAN: (f64, f64) = (35.1796, 129.0756);

    /// Jeju, KMA cell (52, 38)
    pub const JEJU: (f64, f64) = (33.5, 126.5);

    /// Pusan National University campus, map center of the survey
    pub const PNU_CAMPUS: (f64, f64) = (35.2325, 129.0840);

    /// Location used by the forecast snapshot job, KMA cell (98, 77)
    pub const DEFAULT_SNAPSHOT: (f64, f64) = (35.233, 129.08);

    /// London, far outside the KMA grid
    pub const LONDON: (f64, f64) = (51.5074, -0.1278);
}

/// Survey point files.
pub mod survey {
    /// Four survey points around the PNU campus. The last record has a
    /// malformed latitude and must never be selected.
    ///
    /// Decimal coordinates of the valid points:
    /// - "PNU Main Gate": 35.231278, 129.0845
    /// - "Geumjeong Library": 35.233917, 129.086333
    /// - "Jangjeon Stream": 35.227778, 129.08
    pub const CAMPUS_YAML: &str = r#"points:
  - Location_Name: PNU Main Gate
    Lat: "35;13;52.6"
    Lon: "129;5;4.2"
    SVF: 0.412
    GVI: 0.188
    BVI: 0.356
    AirTemperature: 29.4
    Humidity: 63
    WindSpeed: 1.2
    PET: 34.8
  - Location_Name: Geumjeong Library
    Lat: "35;14;2.1"
    Lon: "129;5;10.8"
    SVF: 0.275
    GVI: 0.402
    BVI: 0.211
    AirTemperature: 28.1
    Humidity: 66
    WindSpeed: 0.8
  - Location_Name: Jangjeon Stream
    Lat: "35;13;40.0"
    Lon: "129;4;48.0"
    SVF: 0.634
    GVI: 0.120
    BVI: 0.095
  - Location_Name: Broken Record
    Lat: "bad;data"
    Lon: "129;5;4.2"
    SVF: 0.5
    GVI: 0.5
    BVI: 0.5
"#;

    /// Two-point set in snake_case JSON.
    pub const TWO_POINT_JSON: &str = r#"{
  "points": [
    { "id": "A", "lat": "35;0;0", "lon": "129;0;0", "svf": 0.5, "gvi": 0.2, "bvi": 0.3 },
    { "id": "B", "lat": "35;10;0", "lon": "129;10;0", "svf": 0.4, "gvi": 0.3, "bvi": 0.2 }
  ]
}"#;

    /// Every record is malformed.
    pub const ALL_BROKEN_YAML: &str = r#"points:
  - id: X
    lat: "35;13"
    lon: "129;5;4.2"
    svf: 0.4
    gvi: 0.2
    bvi: 0.3
  - id: Y
    lat: "north;13;2"
    lon: "129;5;4.2"
    svf: 0.4
    gvi: 0.2
    bvi: 0.3
"#;
}

/// KMA open API payloads.
pub mod kma {
    /// `getUltraSrtNcst` for cell (98, 77), base 2025-06-15 14:00.
    pub const NOWCAST_OK: &str = r#"{"response":{"header":{"resultCode":"00","resultMsg":"NORMAL_SERVICE"},"body":{"dataType":"JSON","items":{"item":[
{"baseDate":"20250615","baseTime":"1400","category":"PTY","nx":98,"ny":77,"obsrValue":"0"},
{"baseDate":"20250615","baseTime":"1400","category":"REH","nx":98,"ny":77,"obsrValue":"62"},
{"baseDate":"20250615","baseTime":"1400","category":"RN1","nx":98,"ny":77,"obsrValue":"0"},
{"baseDate":"20250615","baseTime":"1400","category":"T1H","nx":98,"ny":77,"obsrValue":"27.3"},
{"baseDate":"20250615","baseTime":"1400","category":"UUU","nx":98,"ny":77,"obsrValue":"-1.2"},
{"baseDate":"20250615","baseTime":"1400","category":"VEC","nx":98,"ny":77,"obsrValue":"118"},
{"baseDate":"20250615","baseTime":"1400","category":"VVV","nx":98,"ny":77,"obsrValue":"0.6"},
{"baseDate":"20250615","baseTime":"1400","category":"WSD","nx":98,"ny":77,"obsrValue":"1.4"}
]},"pageNo":1,"numOfRows":100,"totalCount":8}}}"#;

    /// Same observation with numeric values instead of strings.
    pub const NOWCAST_NUMERIC: &str = r#"{"response":{"header":{"resultCode":"00","resultMsg":"NORMAL_SERVICE"},"body":{"dataType":"JSON","items":{"item":[
{"baseDate":"20250615","baseTime":"1400","category":"REH","nx":98,"ny":77,"obsrValue":62},
{"baseDate":"20250615","baseTime":"1400","category":"T1H","nx":98,"ny":77,"obsrValue":27.3},
{"baseDate":"20250615","baseTime":"1400","category":"WSD","nx":98,"ny":77,"obsrValue":1.4}
]},"pageNo":1,"numOfRows":100,"totalCount":3}}}"#;

    /// Nowcast lacking the wind speed category.
    pub const NOWCAST_MISSING_WSD: &str = r#"{"response":{"header":{"resultCode":"00","resultMsg":"NORMAL_SERVICE"},"body":{"dataType":"JSON","items":{"item":[
{"baseDate":"20250615","baseTime":"1400","category":"REH","nx":98,"ny":77,"obsrValue":"62"},
{"baseDate":"20250615","baseTime":"1400","category":"T1H","nx":98,"ny":77,"obsrValue":"27.3"}
]},"pageNo":1,"numOfRows":100,"totalCount":2}}}"#;

    /// Provider-side "no data" result without a body.
    pub const NO_DATA: &str =
        r#"{"response":{"header":{"resultCode":"03","resultMsg":"NO_DATA"}}}"#;

    /// Error body returned for an unregistered service key.
    pub const SERVICE_KEY_ERROR_XML: &str = r#"<OpenAPI_ServiceResponse>
    <cmmMsgHeader>
        <errMsg>SERVICE ERROR</errMsg>
        <returnAuthMsg>SERVICE_KEY_IS_NOT_REGISTERED_ERROR</returnAuthMsg>
        <returnReasonCode>30</returnReasonCode>
    </cmmMsgHeader>
</OpenAPI_ServiceResponse>"#;

    /// `getVilageFcst` for cell (98, 77), base 2025-06-15 14:00.
    ///
    /// Slots: 15:00 complete (TMP 27, REH 60, WSD 2.1), 16:00 complete
    /// (TMP 26, REH 65, WSD 1.8), 17:00 missing REH.
    pub const FORECAST_OK: &str = r#"{"response":{"header":{"resultCode":"00","resultMsg":"NORMAL_SERVICE"},"body":{"dataType":"JSON","items":{"item":[
{"baseDate":"20250615","baseTime":"1400","category":"TMP","fcstDate":"20250615","fcstTime":"1500","fcstValue":"27","nx":98,"ny":77},
{"baseDate":"20250615","baseTime":"1400","category":"WSD","fcstDate":"20250615","fcstTime":"1500","fcstValue":"2.1","nx":98,"ny":77},
{"baseDate":"20250615","baseTime":"1400","category":"SKY","fcstDate":"20250615","fcstTime":"1500","fcstValue":"1","nx":98,"ny":77},
{"baseDate":"20250615","baseTime":"1400","category":"REH","fcstDate":"20250615","fcstTime":"1500","fcstValue":"60","nx":98,"ny":77},
{"baseDate":"20250615","baseTime":"1400","category":"TMP","fcstDate":"20250615","fcstTime":"1600","fcstValue":"26","nx":98,"ny":77},
{"baseDate":"20250615","baseTime":"1400","category":"WSD","fcstDate":"20250615","fcstTime":"1600","fcstValue":"1.8","nx":98,"ny":77},
{"baseDate":"20250615","baseTime":"1400","category":"REH","fcstDate":"20250615","fcstTime":"1600","fcstValue":"65","nx":98,"ny":77},
{"baseDate":"20250615","baseTime":"1400","category":"TMP","fcstDate":"20250615","fcstTime":"1700","fcstValue":"25","nx":98,"ny":77},
{"baseDate":"20250615","baseTime":"1400","category":"WSD","fcstDate":"20250615","fcstTime":"1700","fcstValue":"1.5","nx":98,"ny":77}
]},"pageNo":1,"numOfRows":1000,"totalCount":9}}}"#;
}
