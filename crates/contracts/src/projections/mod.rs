pub mod p900_production_suggestion;
