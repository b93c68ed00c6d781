use chrono::NaiveDate;
use serde_json::{json, Value};
use serviboard::modules::backend::UploadRequest;

pub fn upload(file_name: &str) -> UploadRequest {
    UploadRequest::new(file_name, b"PK\x03\x04".to_vec())
}

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

/// General analytics payload with a single month of cash
pub fn general_payload(month: &str, cash: i64) -> Value {
    json!({
        "resumen": {
            month: {
                "efectivo_total": cash,
                "efectivo_cantidad": 1,
                "transferencia_total": 0,
                "transferencia_cantidad": 0,
                "total_general": cash,
                "cantidad_general": 1
            }
        },
        "success": true
    })
}

/// Two-month general payload used by the end-to-end scenarios
pub fn two_month_payload() -> Value {
    json!({
        "resumen": {
            "Enero 2024": {
                "efectivo_total": 1000, "efectivo_cantidad": 2,
                "transferencia_total": 500, "transferencia_cantidad": 1,
                "total_general": 1500, "cantidad_general": 3
            },
            "Febrero 2024": {
                "efectivo_total": 200, "efectivo_cantidad": 1,
                "transferencia_total": 800, "transferencia_cantidad": 2,
                "total_general": 1000, "cantidad_general": 3
            },
            "NaT": {"efectivo_total": 999999}
        },
        "success": true
    })
}

pub fn cash_payload() -> Value {
    json!({
        "resumen": {
            "2024-01": {
                "total_servicios": 1, "total_valor": 80000, "dias_sin_relacionar": 45,
                "tiene_pendientes": true, "tiene_antiguos": true, "num_antiguos": 1,
                "fecha_mas_antigua": "2024-01-16"
            },
            "2024-02": {
                "total_servicios": 2, "total_valor": 120000, "dias_sin_relacionar": 20,
                "tiene_pendientes": true, "tiene_antiguos": false, "num_antiguos": 0,
                "fecha_mas_antigua": "2024-02-10"
            }
        },
        "detalle": [
            {"fecha": "2024-02-25", "estado": "", "servicio_realizado": "", "total_abrecar": 20000,
             "dias_sin_relacionar": 5, "es_antiguo": false},
            {"fecha": "2024-01-16", "estado": "Sin Relacionar", "servicio_realizado": "Apertura",
             "total_abrecar": 80000, "dias_sin_relacionar": 45, "es_antiguo": true},
            {"fecha": "2024-02-10", "estado": "", "servicio_realizado": "Copia de llave",
             "total_abrecar": 100000, "dias_sin_relacionar": 20, "es_antiguo": false},
            {"fecha": "sin fecha", "total_abrecar": 1}
        ],
        "success": true
    })
}
