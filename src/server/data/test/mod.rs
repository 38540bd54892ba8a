mod water_log;
