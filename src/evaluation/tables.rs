//! Perfect-hash lookup tables for five-card classification.
//!
//! Generated offline by enumerating every rank pattern and every paired
//! prime product, assigning classes in descending poker order
//! (1 = royal flush, 7462 = 7-5-4-3-2 unsuited), then searching a
//! displacement for each of the 512 scramble buckets so that no two
//! paired products collide. Every one of the 2,598,960 five-card hands
//! was checked against a brute-force ranker before these were committed.
//! Do not edit by hand.

/// Class of a single-suited hand, indexed by its 13-bit rank pattern.
/// Zero where the pattern does not hold five distinct ranks.
#[rustfmt::skip]
pub(super) static FLUSHES: [u16; 7937] = [
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    9,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 1599,
       0,    0,    0,    0,    0,    0,    0, 1598,    0,    0,    0, 1597,    0, 1596,    8,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 1595,
       0,    0,    0,    0,    0,    0,    0, 1594,    0,    0,    0, 1593,    0, 1592, 1591,    0,
       0,    0,    0,    0,    0,    0,    0, 1590,    0,    0,    0, 1589,    0, 1588, 1587,    0,
       0,    0,    0, 1586,    0, 1585, 1584,    0,    0, 1583, 1582,    0,    7,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 1581,
       0,    0,    0,    0,    0,    0,    0, 1580,    0,    0,    0, 1579,    0, 1578, 1577,    0,
       0,    0,    0,    0,    0,    0,    0, 1576,    0,    0,    0, 1575,    0, 1574, 1573,    0,
       0,    0,    0, 1572,    0, 1571, 1570,    0,    0, 1569, 1568,    0, 1567,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1566,    0,    0,    0, 1565,    0, 1564, 1563,    0,
       0,    0,    0, 1562,    0, 1561, 1560,    0,    0, 1559, 1558,    0, 1557,    0,    0,    0,
       0,    0,    0, 1556,    0, 1555, 1554,    0,    0, 1553, 1552,    0, 1551,    0,    0,    0,
       0, 1550, 1549,    0, 1548,    0,    0,    0,    6,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 1547,
       0,    0,    0,    0,    0,    0,    0, 1546,    0,    0,    0, 1545,    0, 1544, 1543,    0,
       0,    0,    0,    0,    0,    0,    0, 1542,    0,    0,    0, 1541,    0, 1540, 1539,    0,
       0,    0,    0, 1538,    0, 1537, 1536,    0,    0, 1535, 1534,    0, 1533,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1532,    0,    0,    0, 1531,    0, 1530, 1529,    0,
       0,    0,    0, 1528,    0, 1527, 1526,    0,    0, 1525, 1524,    0, 1523,    0,    0,    0,
       0,    0,    0, 1522,    0, 1521, 1520,    0,    0, 1519, 1518,    0, 1517,    0,    0,    0,
       0, 1516, 1515,    0, 1514,    0,    0,    0, 1513,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1512,    0,    0,    0, 1511,    0, 1510, 1509,    0,
       0,    0,    0, 1508,    0, 1507, 1506,    0,    0, 1505, 1504,    0, 1503,    0,    0,    0,
       0,    0,    0, 1502,    0, 1501, 1500,    0,    0, 1499, 1498,    0, 1497,    0,    0,    0,
       0, 1496, 1495,    0, 1494,    0,    0,    0, 1493,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1492,    0, 1491, 1490,    0,    0, 1489, 1488,    0, 1487,    0,    0,    0,
       0, 1486, 1485,    0, 1484,    0,    0,    0, 1483,    0,    0,    0,    0,    0,    0,    0,
       0, 1482, 1481,    0, 1480,    0,    0,    0, 1479,    0,    0,    0,    0,    0,    0,    0,
       5,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 1478,
       0,    0,    0,    0,    0,    0,    0, 1477,    0,    0,    0, 1476,    0, 1475, 1474,    0,
       0,    0,    0,    0,    0,    0,    0, 1473,    0,    0,    0, 1472,    0, 1471, 1470,    0,
       0,    0,    0, 1469,    0, 1468, 1467,    0,    0, 1466, 1465,    0, 1464,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1463,    0,    0,    0, 1462,    0, 1461, 1460,    0,
       0,    0,    0, 1459,    0, 1458, 1457,    0,    0, 1456, 1455,    0, 1454,    0,    0,    0,
       0,    0,    0, 1453,    0, 1452, 1451,    0,    0, 1450, 1449,    0, 1448,    0,    0,    0,
       0, 1447, 1446,    0, 1445,    0,    0,    0, 1444,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1443,    0,    0,    0, 1442,    0, 1441, 1440,    0,
       0,    0,    0, 1439,    0, 1438, 1437,    0,    0, 1436, 1435,    0, 1434,    0,    0,    0,
       0,    0,    0, 1433,    0, 1432, 1431,    0,    0, 1430, 1429,    0, 1428,    0,    0,    0,
       0, 1427, 1426,    0, 1425,    0,    0,    0, 1424,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1423,    0, 1422, 1421,    0,    0, 1420, 1419,    0, 1418,    0,    0,    0,
       0, 1417, 1416,    0, 1415,    0,    0,    0, 1414,    0,    0,    0,    0,    0,    0,    0,
       0, 1413, 1412,    0, 1411,    0,    0,    0, 1410,    0,    0,    0,    0,    0,    0,    0,
    1409,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1408,    0,    0,    0, 1407,    0, 1406, 1405,    0,
       0,    0,    0, 1404,    0, 1403, 1402,    0,    0, 1401, 1400,    0, 1399,    0,    0,    0,
       0,    0,    0, 1398,    0, 1397, 1396,    0,    0, 1395, 1394,    0, 1393,    0,    0,    0,
       0, 1392, 1391,    0, 1390,    0,    0,    0, 1389,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1388,    0, 1387, 1386,    0,    0, 1385, 1384,    0, 1383,    0,    0,    0,
       0, 1382, 1381,    0, 1380,    0,    0,    0, 1379,    0,    0,    0,    0,    0,    0,    0,
       0, 1378, 1377,    0, 1376,    0,    0,    0, 1375,    0,    0,    0,    0,    0,    0,    0,
    1374,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1373,    0, 1372, 1371,    0,    0, 1370, 1369,    0, 1368,    0,    0,    0,
       0, 1367, 1366,    0, 1365,    0,    0,    0, 1364,    0,    0,    0,    0,    0,    0,    0,
       0, 1363, 1362,    0, 1361,    0,    0,    0, 1360,    0,    0,    0,    0,    0,    0,    0,
    1359,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 1358, 1357,    0, 1356,    0,    0,    0, 1355,    0,    0,    0,    0,    0,    0,    0,
    1354,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       4,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 1353,
       0,    0,    0,    0,    0,    0,    0, 1352,    0,    0,    0, 1351,    0, 1350, 1349,    0,
       0,    0,    0,    0,    0,    0,    0, 1348,    0,    0,    0, 1347,    0, 1346, 1345,    0,
       0,    0,    0, 1344,    0, 1343, 1342,    0,    0, 1341, 1340,    0, 1339,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1338,    0,    0,    0, 1337,    0, 1336, 1335,    0,
       0,    0,    0, 1334,    0, 1333, 1332,    0,    0, 1331, 1330,    0, 1329,    0,    0,    0,
       0,    0,    0, 1328,    0, 1327, 1326,    0,    0, 1325, 1324,    0, 1323,    0,    0,    0,
       0, 1322, 1321,    0, 1320,    0,    0,    0, 1319,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1318,    0,    0,    0, 1317,    0, 1316, 1315,    0,
       0,    0,    0, 1314,    0, 1313, 1312,    0,    0, 1311, 1310,    0, 1309,    0,    0,    0,
       0,    0,    0, 1308,    0, 1307, 1306,    0,    0, 1305, 1304,    0, 1303,    0,    0,    0,
       0, 1302, 1301,    0, 1300,    0,    0,    0, 1299,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1298,    0, 1297, 1296,    0,    0, 1295, 1294,    0, 1293,    0,    0,    0,
       0, 1292, 1291,    0, 1290,    0,    0,    0, 1289,    0,    0,    0,    0,    0,    0,    0,
       0, 1288, 1287,    0, 1286,    0,    0,    0, 1285,    0,    0,    0,    0,    0,    0,    0,
    1284,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1283,    0,    0,    0, 1282,    0, 1281, 1280,    0,
       0,    0,    0, 1279,    0, 1278, 1277,    0,    0, 1276, 1275,    0, 1274,    0,    0,    0,
       0,    0,    0, 1273,    0, 1272, 1271,    0,    0, 1270, 1269,    0, 1268,    0,    0,    0,
       0, 1267, 1266,    0, 1265,    0,    0,    0, 1264,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1263,    0, 1262, 1261,    0,    0, 1260, 1259,    0, 1258,    0,    0,    0,
       0, 1257, 1256,    0, 1255,    0,    0,    0, 1254,    0,    0,    0,    0,    0,    0,    0,
       0, 1253, 1252,    0, 1251,    0,    0,    0, 1250,    0,    0,    0,    0,    0,    0,    0,
    1249,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1248,    0, 1247, 1246,    0,    0, 1245, 1244,    0, 1243,    0,    0,    0,
       0, 1242, 1241,    0, 1240,    0,    0,    0, 1239,    0,    0,    0,    0,    0,    0,    0,
       0, 1238, 1237,    0, 1236,    0,    0,    0, 1235,    0,    0,    0,    0,    0,    0,    0,
    1234,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 1233, 1232,    0, 1231,    0,    0,    0, 1230,    0,    0,    0,    0,    0,    0,    0,
    1229,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    1228,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1227,    0,    0,    0, 1226,    0, 1225, 1224,    0,
       0,    0,    0, 1223,    0, 1222, 1221,    0,    0, 1220, 1219,    0, 1218,    0,    0,    0,
       0,    0,    0, 1217,    0, 1216, 1215,    0,    0, 1214, 1213,    0, 1212,    0,    0,    0,
       0, 1211, 1210,    0, 1209,    0,    0,    0, 1208,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1207,    0, 1206, 1205,    0,    0, 1204, 1203,    0, 1202,    0,    0,    0,
       0, 1201, 1200,    0, 1199,    0,    0,    0, 1198,    0,    0,    0,    0,    0,    0,    0,
       0, 1197, 1196,    0, 1195,    0,    0,    0, 1194,    0,    0,    0,    0,    0,    0,    0,
    1193,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1192,    0, 1191, 1190,    0,    0, 1189, 1188,    0, 1187,    0,    0,    0,
       0, 1186, 1185,    0, 1184,    0,    0,    0, 1183,    0,    0,    0,    0,    0,    0,    0,
       0, 1182, 1181,    0, 1180,    0,    0,    0, 1179,    0,    0,    0,    0,    0,    0,    0,
    1178,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 1177, 1176,    0, 1175,    0,    0,    0, 1174,    0,    0,    0,    0,    0,    0,    0,
    1173,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    1172,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1171,    0, 1170, 1169,    0,    0, 1168, 1167,    0, 1166,    0,    0,    0,
       0, 1165, 1164,    0, 1163,    0,    0,    0, 1162,    0,    0,    0,    0,    0,    0,    0,
       0, 1161, 1160,    0, 1159,    0,    0,    0, 1158,    0,    0,    0,    0,    0,    0,    0,
    1157,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 1156, 1155,    0, 1154,    0,    0,    0, 1153,    0,    0,    0,    0,    0,    0,    0,
    1152,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    1151,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 1150, 1149,    0, 1148,    0,    0,    0, 1147,    0,    0,    0,    0,    0,    0,    0,
    1146,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    1145,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       3,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 1144,
       0,    0,    0,    0,    0,    0,    0, 1143,    0,    0,    0, 1142,    0, 1141, 1140,    0,
       0,    0,    0,    0,    0,    0,    0, 1139,    0,    0,    0, 1138,    0, 1137, 1136,    0,
       0,    0,    0, 1135,    0, 1134, 1133,    0,    0, 1132, 1131,    0, 1130,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1129,    0,    0,    0, 1128,    0, 1127, 1126,    0,
       0,    0,    0, 1125,    0, 1124, 1123,    0,    0, 1122, 1121,    0, 1120,    0,    0,    0,
       0,    0,    0, 1119,    0, 1118, 1117,    0,    0, 1116, 1115,    0, 1114,    0,    0,    0,
       0, 1113, 1112,    0, 1111,    0,    0,    0, 1110,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1109,    0,    0,    0, 1108,    0, 1107, 1106,    0,
       0,    0,    0, 1105,    0, 1104, 1103,    0,    0, 1102, 1101,    0, 1100,    0,    0,    0,
       0,    0,    0, 1099,    0, 1098, 1097,    0,    0, 1096, 1095,    0, 1094,    0,    0,    0,
       0, 1093, 1092,    0, 1091,    0,    0,    0, 1090,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1089,    0, 1088, 1087,    0,    0, 1086, 1085,    0, 1084,    0,    0,    0,
       0, 1083, 1082,    0, 1081,    0,    0,    0, 1080,    0,    0,    0,    0,    0,    0,    0,
       0, 1079, 1078,    0, 1077,    0,    0,    0, 1076,    0,    0,    0,    0,    0,    0,    0,
    1075,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1074,    0,    0,    0, 1073,    0, 1072, 1071,    0,
       0,    0,    0, 1070,    0, 1069, 1068,    0,    0, 1067, 1066,    0, 1065,    0,    0,    0,
       0,    0,    0, 1064,    0, 1063, 1062,    0,    0, 1061, 1060,    0, 1059,    0,    0,    0,
       0, 1058, 1057,    0, 1056,    0,    0,    0, 1055,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1054,    0, 1053, 1052,    0,    0, 1051, 1050,    0, 1049,    0,    0,    0,
       0, 1048, 1047,    0, 1046,    0,    0,    0, 1045,    0,    0,    0,    0,    0,    0,    0,
       0, 1044, 1043,    0, 1042,    0,    0,    0, 1041,    0,    0,    0,    0,    0,    0,    0,
    1040,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 1039,    0, 1038, 1037,    0,    0, 1036, 1035,    0, 1034,    0,    0,    0,
       0, 1033, 1032,    0, 1031,    0,    0,    0, 1030,    0,    0,    0,    0,    0,    0,    0,
       0, 1029, 1028,    0, 1027,    0,    0,    0, 1026,    0,    0,    0,    0,    0,    0,    0,
    1025,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 1024, 1023,    0, 1022,    0,    0,    0, 1021,    0,    0,    0,    0,    0,    0,    0,
    1020,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    1019,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1018,    0,    0,    0, 1017,    0, 1016, 1015,    0,
       0,    0,    0, 1014,    0, 1013, 1012,    0,    0, 1011, 1010,    0, 1009,    0,    0,    0,
       0,    0,    0, 1008,    0, 1007, 1006,    0,    0, 1005, 1004,    0, 1003,    0,    0,    0,
       0, 1002, 1001,    0, 1000,    0,    0,    0,  999,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  998,    0,  997,  996,    0,    0,  995,  994,    0,  993,    0,    0,    0,
       0,  992,  991,    0,  990,    0,    0,    0,  989,    0,    0,    0,    0,    0,    0,    0,
       0,  988,  987,    0,  986,    0,    0,    0,  985,    0,    0,    0,    0,    0,    0,    0,
     984,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  983,    0,  982,  981,    0,    0,  980,  979,    0,  978,    0,    0,    0,
       0,  977,  976,    0,  975,    0,    0,    0,  974,    0,    0,    0,    0,    0,    0,    0,
       0,  973,  972,    0,  971,    0,    0,    0,  970,    0,    0,    0,    0,    0,    0,    0,
     969,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  968,  967,    0,  966,    0,    0,    0,  965,    0,    0,    0,    0,    0,    0,    0,
     964,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     963,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  962,    0,  961,  960,    0,    0,  959,  958,    0,  957,    0,    0,    0,
       0,  956,  955,    0,  954,    0,    0,    0,  953,    0,    0,    0,    0,    0,    0,    0,
       0,  952,  951,    0,  950,    0,    0,    0,  949,    0,    0,    0,    0,    0,    0,    0,
     948,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  947,  946,    0,  945,    0,    0,    0,  944,    0,    0,    0,    0,    0,    0,    0,
     943,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     942,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  941,  940,    0,  939,    0,    0,    0,  938,    0,    0,    0,    0,    0,    0,    0,
     937,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     936,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     935,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,  934,    0,    0,    0,  933,    0,  932,  931,    0,
       0,    0,    0,  930,    0,  929,  928,    0,    0,  927,  926,    0,  925,    0,    0,    0,
       0,    0,    0,  924,    0,  923,  922,    0,    0,  921,  920,    0,  919,    0,    0,    0,
       0,  918,  917,    0,  916,    0,    0,    0,  915,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  914,    0,  913,  912,    0,    0,  911,  910,    0,  909,    0,    0,    0,
       0,  908,  907,    0,  906,    0,    0,    0,  905,    0,    0,    0,    0,    0,    0,    0,
       0,  904,  903,    0,  902,    0,    0,    0,  901,    0,    0,    0,    0,    0,    0,    0,
     900,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  899,    0,  898,  897,    0,    0,  896,  895,    0,  894,    0,    0,    0,
       0,  893,  892,    0,  891,    0,    0,    0,  890,    0,    0,    0,    0,    0,    0,    0,
       0,  889,  888,    0,  887,    0,    0,    0,  886,    0,    0,    0,    0,    0,    0,    0,
     885,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  884,  883,    0,  882,    0,    0,    0,  881,    0,    0,    0,    0,    0,    0,    0,
     880,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     879,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  878,    0,  877,  876,    0,    0,  875,  874,    0,  873,    0,    0,    0,
       0,  872,  871,    0,  870,    0,    0,    0,  869,    0,    0,    0,    0,    0,    0,    0,
       0,  868,  867,    0,  866,    0,    0,    0,  865,    0,    0,    0,    0,    0,    0,    0,
     864,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  863,  862,    0,  861,    0,    0,    0,  860,    0,    0,    0,    0,    0,    0,    0,
     859,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     858,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  857,  856,    0,  855,    0,    0,    0,  854,    0,    0,    0,    0,    0,    0,    0,
     853,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     852,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     851,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  850,    0,  849,  848,    0,    0,  847,  846,    0,  845,    0,    0,    0,
       0,  844,  843,    0,  842,    0,    0,    0,  841,    0,    0,    0,    0,    0,    0,    0,
       0,  840,  839,    0,  838,    0,    0,    0,  837,    0,    0,    0,    0,    0,    0,    0,
     836,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  835,  834,    0,  833,    0,    0,    0,  832,    0,    0,    0,    0,    0,    0,    0,
     831,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     830,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  829,  828,    0,  827,    0,    0,    0,  826,    0,    0,    0,    0,    0,    0,    0,
     825,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     824,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     823,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  822,  821,    0,  820,    0,    0,    0,  819,    0,    0,    0,    0,    0,    0,    0,
     818,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     817,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     816,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       2,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,   10,
       0,    0,    0,    0,    0,    0,    0,  815,    0,    0,    0,  814,    0,  813,  812,    0,
       0,    0,    0,    0,    0,    0,    0,  811,    0,    0,    0,  810,    0,  809,  808,    0,
       0,    0,    0,  807,    0,  806,  805,    0,    0,  804,  803,    0,  802,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,  801,    0,    0,    0,  800,    0,  799,  798,    0,
       0,    0,    0,  797,    0,  796,  795,    0,    0,  794,  793,    0,  792,    0,    0,    0,
       0,    0,    0,  791,    0,  790,  789,    0,    0,  788,  787,    0,  786,    0,    0,    0,
       0,  785,  784,    0,  783,    0,    0,    0,  782,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,  781,    0,    0,    0,  780,    0,  779,  778,    0,
       0,    0,    0,  777,    0,  776,  775,    0,    0,  774,  773,    0,  772,    0,    0,    0,
       0,    0,    0,  771,    0,  770,  769,    0,    0,  768,  767,    0,  766,    0,    0,    0,
       0,  765,  764,    0,  763,    0,    0,    0,  762,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  761,    0,  760,  759,    0,    0,  758,  757,    0,  756,    0,    0,    0,
       0,  755,  754,    0,  753,    0,    0,    0,  752,    0,    0,    0,    0,    0,    0,    0,
       0,  751,  750,    0,  749,    0,    0,    0,  748,    0,    0,    0,    0,    0,    0,    0,
     747,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,  746,    0,    0,    0,  745,    0,  744,  743,    0,
       0,    0,    0,  742,    0,  741,  740,    0,    0,  739,  738,    0,  737,    0,    0,    0,
       0,    0,    0,  736,    0,  735,  734,    0,    0,  733,  732,    0,  731,    0,    0,    0,
       0,  730,  729,    0,  728,    0,    0,    0,  727,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  726,    0,  725,  724,    0,    0,  723,  722,    0,  721,    0,    0,    0,
       0,  720,  719,    0,  718,    0,    0,    0,  717,    0,    0,    0,    0,    0,    0,    0,
       0,  716,  715,    0,  714,    0,    0,    0,  713,    0,    0,    0,    0,    0,    0,    0,
     712,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  711,    0,  710,  709,    0,    0,  708,  707,    0,  706,    0,    0,    0,
       0,  705,  704,    0,  703,    0,    0,    0,  702,    0,    0,    0,    0,    0,    0,    0,
       0,  701,  700,    0,  699,    0,    0,    0,  698,    0,    0,    0,    0,    0,    0,    0,
     697,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  696,  695,    0,  694,    0,    0,    0,  693,    0,    0,    0,    0,    0,    0,    0,
     692,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     691,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,  690,    0,    0,    0,  689,    0,  688,  687,    0,
       0,    0,    0,  686,    0,  685,  684,    0,    0,  683,  682,    0,  681,    0,    0,    0,
       0,    0,    0,  680,    0,  679,  678,    0,    0,  677,  676,    0,  675,    0,    0,    0,
       0,  674,  673,    0,  672,    0,    0,    0,  671,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  670,    0,  669,  668,    0,    0,  667,  666,    0,  665,    0,    0,    0,
       0,  664,  663,    0,  662,    0,    0,    0,  661,    0,    0,    0,    0,    0,    0,    0,
       0,  660,  659,    0,  658,    0,    0,    0,  657,    0,    0,    0,    0,    0,    0,    0,
     656,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  655,    0,  654,  653,    0,    0,  652,  651,    0,  650,    0,    0,    0,
       0,  649,  648,    0,  647,    0,    0,    0,  646,    0,    0,    0,    0,    0,    0,    0,
       0,  645,  644,    0,  643,    0,    0,    0,  642,    0,    0,    0,    0,    0,    0,    0,
     641,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  640,  639,    0,  638,    0,    0,    0,  637,    0,    0,    0,    0,    0,    0,    0,
     636,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     635,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  634,    0,  633,  632,    0,    0,  631,  630,    0,  629,    0,    0,    0,
       0,  628,  627,    0,  626,    0,    0,    0,  625,    0,    0,    0,    0,    0,    0,    0,
       0,  624,  623,    0,  622,    0,    0,    0,  621,    0,    0,    0,    0,    0,    0,    0,
     620,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  619,  618,    0,  617,    0,    0,    0,  616,    0,    0,    0,    0,    0,    0,    0,
     615,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     614,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  613,  612,    0,  611,    0,    0,    0,  610,    0,    0,    0,    0,    0,    0,    0,
     609,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     608,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     607,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,  606,    0,    0,    0,  605,    0,  604,  603,    0,
       0,    0,    0,  602,    0,  601,  600,    0,    0,  599,  598,    0,  597,    0,    0,    0,
       0,    0,    0,  596,    0,  595,  594,    0,    0,  593,  592,    0,  591,    0,    0,    0,
       0,  590,  589,    0,  588,    0,    0,    0,  587,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  586,    0,  585,  584,    0,    0,  583,  582,    0,  581,    0,    0,    0,
       0,  580,  579,    0,  578,    0,    0,    0,  577,    0,    0,    0,    0,    0,    0,    0,
       0,  576,  575,    0,  574,    0,    0,    0,  573,    0,    0,    0,    0,    0,    0,    0,
     572,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  571,    0,  570,  569,    0,    0,  568,  567,    0,  566,    0,    0,    0,
       0,  565,  564,    0,  563,    0,    0,    0,  562,    0,    0,    0,    0,    0,    0,    0,
       0,  561,  560,    0,  559,    0,    0,    0,  558,    0,    0,    0,    0,    0,    0,    0,
     557,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  556,  555,    0,  554,    0,    0,    0,  553,    0,    0,    0,    0,    0,    0,    0,
     552,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     551,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  550,    0,  549,  548,    0,    0,  547,  546,    0,  545,    0,    0,    0,
       0,  544,  543,    0,  542,    0,    0,    0,  541,    0,    0,    0,    0,    0,    0,    0,
       0,  540,  539,    0,  538,    0,    0,    0,  537,    0,    0,    0,    0,    0,    0,    0,
     536,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  535,  534,    0,  533,    0,    0,    0,  532,    0,    0,    0,    0,    0,    0,    0,
     531,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     530,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  529,  528,    0,  527,    0,    0,    0,  526,    0,    0,    0,    0,    0,    0,    0,
     525,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     524,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     523,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  522,    0,  521,  520,    0,    0,  519,  518,    0,  517,    0,    0,    0,
       0,  516,  515,    0,  514,    0,    0,    0,  513,    0,    0,    0,    0,    0,    0,    0,
       0,  512,  511,    0,  510,    0,    0,    0,  509,    0,    0,    0,    0,    0,    0,    0,
     508,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  507,  506,    0,  505,    0,    0,    0,  504,    0,    0,    0,    0,    0,    0,    0,
     503,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     502,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  501,  500,    0,  499,    0,    0,    0,  498,    0,    0,    0,    0,    0,    0,    0,
     497,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     496,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     495,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  494,  493,    0,  492,    0,    0,    0,  491,    0,    0,    0,    0,    0,    0,    0,
     490,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     489,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     488,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     487,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,  486,    0,    0,    0,  485,    0,  484,  483,    0,
       0,    0,    0,  482,    0,  481,  480,    0,    0,  479,  478,    0,  477,    0,    0,    0,
       0,    0,    0,  476,    0,  475,  474,    0,    0,  473,  472,    0,  471,    0,    0,    0,
       0,  470,  469,    0,  468,    0,    0,    0,  467,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  466,    0,  465,  464,    0,    0,  463,  462,    0,  461,    0,    0,    0,
       0,  460,  459,    0,  458,    0,    0,    0,  457,    0,    0,    0,    0,    0,    0,    0,
       0,  456,  455,    0,  454,    0,    0,    0,  453,    0,    0,    0,    0,    0,    0,    0,
     452,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  451,    0,  450,  449,    0,    0,  448,  447,    0,  446,    0,    0,    0,
       0,  445,  444,    0,  443,    0,    0,    0,  442,    0,    0,    0,    0,    0,    0,    0,
       0,  441,  440,    0,  439,    0,    0,    0,  438,    0,    0,    0,    0,    0,    0,    0,
     437,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  436,  435,    0,  434,    0,    0,    0,  433,    0,    0,    0,    0,    0,    0,    0,
     432,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     431,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  430,    0,  429,  428,    0,    0,  427,  426,    0,  425,    0,    0,    0,
       0,  424,  423,    0,  422,    0,    0,    0,  421,    0,    0,    0,    0,    0,    0,    0,
       0,  420,  419,    0,  418,    0,    0,    0,  417,    0,    0,    0,    0,    0,    0,    0,
     416,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  415,  414,    0,  413,    0,    0,    0,  412,    0,    0,    0,    0,    0,    0,    0,
     411,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     410,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  409,  408,    0,  407,    0,    0,    0,  406,    0,    0,    0,    0,    0,    0,    0,
     405,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     404,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     403,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  402,    0,  401,  400,    0,    0,  399,  398,    0,  397,    0,    0,    0,
       0,  396,  395,    0,  394,    0,    0,    0,  393,    0,    0,    0,    0,    0,    0,    0,
       0,  392,  391,    0,  390,    0,    0,    0,  389,    0,    0,    0,    0,    0,    0,    0,
     388,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  387,  386,    0,  385,    0,    0,    0,  384,    0,    0,    0,    0,    0,    0,    0,
     383,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     382,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  381,  380,    0,  379,    0,    0,    0,  378,    0,    0,    0,    0,    0,    0,    0,
     377,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     376,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     375,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  374,  373,    0,  372,    0,    0,    0,  371,    0,    0,    0,    0,    0,    0,    0,
     370,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     369,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     368,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     367,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,  366,    0,  365,  364,    0,    0,  363,  362,    0,  361,    0,    0,    0,
       0,  360,  359,    0,  358,    0,    0,    0,  357,    0,    0,    0,    0,    0,    0,    0,
       0,  356,  355,    0,  354,    0,    0,    0,  353,    0,    0,    0,    0,    0,    0,    0,
     352,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  351,  350,    0,  349,    0,    0,    0,  348,    0,    0,    0,    0,    0,    0,    0,
     347,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     346,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  345,  344,    0,  343,    0,    0,    0,  342,    0,    0,    0,    0,    0,    0,    0,
     341,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     340,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     339,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  338,  337,    0,  336,    0,    0,    0,  335,    0,    0,    0,    0,    0,    0,    0,
     334,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     333,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     332,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     331,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,  330,  329,    0,  328,    0,    0,    0,  327,    0,    0,    0,    0,    0,    0,    0,
     326,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     325,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     324,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
     323,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       1,
];

/// Class of a multi-suited hand with five distinct ranks (straights and
/// high cards), indexed by rank pattern. Zero for paired patterns.
#[rustfmt::skip]
pub(super) static UNIQUE5: [u16; 7937] = [
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 1608,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 7462,
       0,    0,    0,    0,    0,    0,    0, 7461,    0,    0,    0, 7460,    0, 7459, 1607,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 7458,
       0,    0,    0,    0,    0,    0,    0, 7457,    0,    0,    0, 7456,    0, 7455, 7454,    0,
       0,    0,    0,    0,    0,    0,    0, 7453,    0,    0,    0, 7452,    0, 7451, 7450,    0,
       0,    0,    0, 7449,    0, 7448, 7447,    0,    0, 7446, 7445,    0, 1606,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 7444,
       0,    0,    0,    0,    0,    0,    0, 7443,    0,    0,    0, 7442,    0, 7441, 7440,    0,
       0,    0,    0,    0,    0,    0,    0, 7439,    0,    0,    0, 7438,    0, 7437, 7436,    0,
       0,    0,    0, 7435,    0, 7434, 7433,    0,    0, 7432, 7431,    0, 7430,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 7429,    0,    0,    0, 7428,    0, 7427, 7426,    0,
       0,    0,    0, 7425,    0, 7424, 7423,    0,    0, 7422, 7421,    0, 7420,    0,    0,    0,
       0,    0,    0, 7419,    0, 7418, 7417,    0,    0, 7416, 7415,    0, 7414,    0,    0,    0,
       0, 7413, 7412,    0, 7411,    0,    0,    0, 1605,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 7410,
       0,    0,    0,    0,    0,    0,    0, 7409,    0,    0,    0, 7408,    0, 7407, 7406,    0,
       0,    0,    0,    0,    0,    0,    0, 7405,    0,    0,    0, 7404,    0, 7403, 7402,    0,
       0,    0,    0, 7401,    0, 7400, 7399,    0,    0, 7398, 7397,    0, 7396,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 7395,    0,    0,    0, 7394,    0, 7393, 7392,    0,
       0,    0,    0, 7391,    0, 7390, 7389,    0,    0, 7388, 7387,    0, 7386,    0,    0,    0,
       0,    0,    0, 7385,    0, 7384, 7383,    0,    0, 7382, 7381,    0, 7380,    0,    0,    0,
       0, 7379, 7378,    0, 7377,    0,    0,    0, 7376,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 7375,    0,    0,    0, 7374,    0, 7373, 7372,    0,
       0,    0,    0, 7371,    0, 7370, 7369,    0,    0, 7368, 7367,    0, 7366,    0,    0,    0,
       0,    0,    0, 7365,    0, 7364, 7363,    0,    0, 7362, 7361,    0, 7360,    0,    0,    0,
       0, 7359, 7358,    0, 7357,    0,    0,    0, 7356,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 7355,    0, 7354, 7353,    0,    0, 7352, 7351,    0, 7350,    0,    0,    0,
       0, 7349, 7348,    0, 7347,    0,    0,    0, 7346,    0,    0,    0,    0,    0,    0,    0,
       0, 7345, 7344,    0, 7343,    0,    0,    0, 7342,    0,    0,    0,    0,    0,    0,    0,
    1604,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 7341,
       0,    0,    0,    0,    0,    0,    0, 7340,    0,    0,    0, 7339,    0, 7338, 7337,    0,
       0,    0,    0,    0,    0,    0,    0, 7336,    0,    0,    0, 7335,    0, 7334, 7333,    0,
       0,    0,    0, 7332,    0, 7331, 7330,    0,    0, 7329, 7328,    0, 7327,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 7326,    0,    0,    0, 7325,    0, 7324, 7323,    0,
       0,    0,    0, 7322,    0, 7321, 7320,    0,    0, 7319, 7318,    0, 7317,    0,    0,    0,
       0,    0,    0, 7316,    0, 7315, 7314,    0,    0, 7313, 7312,    0, 7311,    0,    0,    0,
       0, 7310, 7309,    0, 7308,    0,    0,    0, 7307,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 7306,    0,    0,    0, 7305,    0, 7304, 7303,    0,
       0,    0,    0, 7302,    0, 7301, 7300,    0,    0, 7299, 7298,    0, 7297,    0,    0,    0,
       0,    0,    0, 7296,    0, 7295, 7294,    0,    0, 7293, 7292,    0, 7291,    0,    0,    0,
       0, 7290, 7289,    0, 7288,    0,    0,    0, 7287,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 7286,    0, 7285, 7284,    0,    0, 7283, 7282,    0, 7281,    0,    0,    0,
       0, 7280, 7279,    0, 7278,    0,    0,    0, 7277,    0,    0,    0,    0,    0,    0,    0,
       0, 7276, 7275,    0, 7274,    0,    0,    0, 7273,    0,    0,    0,    0,    0,    0,    0,
    7272,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 7271,    0,    0,    0, 7270,    0, 7269, 7268,    0,
       0,    0,    0, 7267,    0, 7266, 7265,    0,    0, 7264, 7263,    0, 7262,    0,    0,    0,
       0,    0,    0, 7261,    0, 7260, 7259,    0,    0, 7258, 7257,    0, 7256,    0,    0,    0,
       0, 7255, 7254,    0, 7253,    0,    0,    0, 7252,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 7251,    0, 7250, 7249,    0,    0, 7248, 7247,    0, 7246,    0,    0,    0,
       0, 7245, 7244,    0, 7243,    0,    0,    0, 7242,    0,    0,    0,    0,    0,    0,    0,
       0, 7241, 7240,    0, 7239,    0,    0,    0, 7238,    0,    0,    0,    0,    0,    0,    0,
    7237,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 7236,    0, 7235, 7234,    0,    0, 7233, 7232,    0, 7231,    0,    0,    0,
       0, 7230, 7229,    0, 7228,    0,    0,    0, 7227,    0,    0,    0,    0,    0,    0,    0,
       0, 7226, 7225,    0, 7224,    0,    0,    0, 7223,    0,    0,    0,    0,    0,    0,    0,
    7222,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 7221, 7220,    0, 7219,    0,    0,    0, 7218,    0,    0,    0,    0,    0,    0,    0,
    7217,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    1603,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 7216,
       0,    0,    0,    0,    0,    0,    0, 7215,    0,    0,    0, 7214,    0, 7213, 7212,    0,
       0,    0,    0,    0,    0,    0,    0, 7211,    0,    0,    0, 7210,    0, 7209, 7208,    0,
       0,    0,    0, 7207,    0, 7206, 7205,    0,    0, 7204, 7203,    0, 7202,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 7201,    0,    0,    0, 7200,    0, 7199, 7198,    0,
       0,    0,    0, 7197,    0, 7196, 7195,    0,    0, 7194, 7193,    0, 7192,    0,    0,    0,
       0,    0,    0, 7191,    0, 7190, 7189,    0,    0, 7188, 7187,    0, 7186,    0,    0,    0,
       0, 7185, 7184,    0, 7183,    0,    0,    0, 7182,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 7181,    0,    0,    0, 7180,    0, 7179, 7178,    0,
       0,    0,    0, 7177,    0, 7176, 7175,    0,    0, 7174, 7173,    0, 7172,    0,    0,    0,
       0,    0,    0, 7171,    0, 7170, 7169,    0,    0, 7168, 7167,    0, 7166,    0,    0,    0,
       0, 7165, 7164,    0, 7163,    0,    0,    0, 7162,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 7161,    0, 7160, 7159,    0,    0, 7158, 7157,    0, 7156,    0,    0,    0,
       0, 7155, 7154,    0, 7153,    0,    0,    0, 7152,    0,    0,    0,    0,    0,    0,    0,
       0, 7151, 7150,    0, 7149,    0,    0,    0, 7148,    0,    0,    0,    0,    0,    0,    0,
    7147,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 7146,    0,    0,    0, 7145,    0, 7144, 7143,    0,
       0,    0,    0, 7142,    0, 7141, 7140,    0,    0, 7139, 7138,    0, 7137,    0,    0,    0,
       0,    0,    0, 7136,    0, 7135, 7134,    0,    0, 7133, 7132,    0, 7131,    0,    0,    0,
       0, 7130, 7129,    0, 7128,    0,    0,    0, 7127,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 7126,    0, 7125, 7124,    0,    0, 7123, 7122,    0, 7121,    0,    0,    0,
       0, 7120, 7119,    0, 7118,    0,    0,    0, 7117,    0,    0,    0,    0,    0,    0,    0,
       0, 7116, 7115,    0, 7114,    0,    0,    0, 7113,    0,    0,    0,    0,    0,    0,    0,
    7112,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 7111,    0, 7110, 7109,    0,    0, 7108, 7107,    0, 7106,    0,    0,    0,
       0, 7105, 7104,    0, 7103,    0,    0,    0, 7102,    0,    0,    0,    0,    0,    0,    0,
       0, 7101, 7100,    0, 7099,    0,    0,    0, 7098,    0,    0,    0,    0,    0,    0,    0,
    7097,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 7096, 7095,    0, 7094,    0,    0,    0, 7093,    0,    0,    0,    0,    0,    0,    0,
    7092,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    7091,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 7090,    0,    0,    0, 7089,    0, 7088, 7087,    0,
       0,    0,    0, 7086,    0, 7085, 7084,    0,    0, 7083, 7082,    0, 7081,    0,    0,    0,
       0,    0,    0, 7080,    0, 7079, 7078,    0,    0, 7077, 7076,    0, 7075,    0,    0,    0,
       0, 7074, 7073,    0, 7072,    0,    0,    0, 7071,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 7070,    0, 7069, 7068,    0,    0, 7067, 7066,    0, 7065,    0,    0,    0,
       0, 7064, 7063,    0, 7062,    0,    0,    0, 7061,    0,    0,    0,    0,    0,    0,    0,
       0, 7060, 7059,    0, 7058,    0,    0,    0, 7057,    0,    0,    0,    0,    0,    0,    0,
    7056,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 7055,    0, 7054, 7053,    0,    0, 7052, 7051,    0, 7050,    0,    0,    0,
       0, 7049, 7048,    0, 7047,    0,    0,    0, 7046,    0,    0,    0,    0,    0,    0,    0,
       0, 7045, 7044,    0, 7043,    0,    0,    0, 7042,    0,    0,    0,    0,    0,    0,    0,
    7041,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 7040, 7039,    0, 7038,    0,    0,    0, 7037,    0,    0,    0,    0,    0,    0,    0,
    7036,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    7035,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 7034,    0, 7033, 7032,    0,    0, 7031, 7030,    0, 7029,    0,    0,    0,
       0, 7028, 7027,    0, 7026,    0,    0,    0, 7025,    0,    0,    0,    0,    0,    0,    0,
       0, 7024, 7023,    0, 7022,    0,    0,    0, 7021,    0,    0,    0,    0,    0,    0,    0,
    7020,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 7019, 7018,    0, 7017,    0,    0,    0, 7016,    0,    0,    0,    0,    0,    0,    0,
    7015,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    7014,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 7013, 7012,    0, 7011,    0,    0,    0, 7010,    0,    0,    0,    0,    0,    0,    0,
    7009,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    7008,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    1602,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 7007,
       0,    0,    0,    0,    0,    0,    0, 7006,    0,    0,    0, 7005,    0, 7004, 7003,    0,
       0,    0,    0,    0,    0,    0,    0, 7002,    0,    0,    0, 7001,    0, 7000, 6999,    0,
       0,    0,    0, 6998,    0, 6997, 6996,    0,    0, 6995, 6994,    0, 6993,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 6992,    0,    0,    0, 6991,    0, 6990, 6989,    0,
       0,    0,    0, 6988,    0, 6987, 6986,    0,    0, 6985, 6984,    0, 6983,    0,    0,    0,
       0,    0,    0, 6982,    0, 6981, 6980,    0,    0, 6979, 6978,    0, 6977,    0,    0,    0,
       0, 6976, 6975,    0, 6974,    0,    0,    0, 6973,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 6972,    0,    0,    0, 6971,    0, 6970, 6969,    0,
       0,    0,    0, 6968,    0, 6967, 6966,    0,    0, 6965, 6964,    0, 6963,    0,    0,    0,
       0,    0,    0, 6962,    0, 6961, 6960,    0,    0, 6959, 6958,    0, 6957,    0,    0,    0,
       0, 6956, 6955,    0, 6954,    0,    0,    0, 6953,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6952,    0, 6951, 6950,    0,    0, 6949, 6948,    0, 6947,    0,    0,    0,
       0, 6946, 6945,    0, 6944,    0,    0,    0, 6943,    0,    0,    0,    0,    0,    0,    0,
       0, 6942, 6941,    0, 6940,    0,    0,    0, 6939,    0,    0,    0,    0,    0,    0,    0,
    6938,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 6937,    0,    0,    0, 6936,    0, 6935, 6934,    0,
       0,    0,    0, 6933,    0, 6932, 6931,    0,    0, 6930, 6929,    0, 6928,    0,    0,    0,
       0,    0,    0, 6927,    0, 6926, 6925,    0,    0, 6924, 6923,    0, 6922,    0,    0,    0,
       0, 6921, 6920,    0, 6919,    0,    0,    0, 6918,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6917,    0, 6916, 6915,    0,    0, 6914, 6913,    0, 6912,    0,    0,    0,
       0, 6911, 6910,    0, 6909,    0,    0,    0, 6908,    0,    0,    0,    0,    0,    0,    0,
       0, 6907, 6906,    0, 6905,    0,    0,    0, 6904,    0,    0,    0,    0,    0,    0,    0,
    6903,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6902,    0, 6901, 6900,    0,    0, 6899, 6898,    0, 6897,    0,    0,    0,
       0, 6896, 6895,    0, 6894,    0,    0,    0, 6893,    0,    0,    0,    0,    0,    0,    0,
       0, 6892, 6891,    0, 6890,    0,    0,    0, 6889,    0,    0,    0,    0,    0,    0,    0,
    6888,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6887, 6886,    0, 6885,    0,    0,    0, 6884,    0,    0,    0,    0,    0,    0,    0,
    6883,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6882,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 6881,    0,    0,    0, 6880,    0, 6879, 6878,    0,
       0,    0,    0, 6877,    0, 6876, 6875,    0,    0, 6874, 6873,    0, 6872,    0,    0,    0,
       0,    0,    0, 6871,    0, 6870, 6869,    0,    0, 6868, 6867,    0, 6866,    0,    0,    0,
       0, 6865, 6864,    0, 6863,    0,    0,    0, 6862,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6861,    0, 6860, 6859,    0,    0, 6858, 6857,    0, 6856,    0,    0,    0,
       0, 6855, 6854,    0, 6853,    0,    0,    0, 6852,    0,    0,    0,    0,    0,    0,    0,
       0, 6851, 6850,    0, 6849,    0,    0,    0, 6848,    0,    0,    0,    0,    0,    0,    0,
    6847,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6846,    0, 6845, 6844,    0,    0, 6843, 6842,    0, 6841,    0,    0,    0,
       0, 6840, 6839,    0, 6838,    0,    0,    0, 6837,    0,    0,    0,    0,    0,    0,    0,
       0, 6836, 6835,    0, 6834,    0,    0,    0, 6833,    0,    0,    0,    0,    0,    0,    0,
    6832,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6831, 6830,    0, 6829,    0,    0,    0, 6828,    0,    0,    0,    0,    0,    0,    0,
    6827,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6826,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6825,    0, 6824, 6823,    0,    0, 6822, 6821,    0, 6820,    0,    0,    0,
       0, 6819, 6818,    0, 6817,    0,    0,    0, 6816,    0,    0,    0,    0,    0,    0,    0,
       0, 6815, 6814,    0, 6813,    0,    0,    0, 6812,    0,    0,    0,    0,    0,    0,    0,
    6811,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6810, 6809,    0, 6808,    0,    0,    0, 6807,    0,    0,    0,    0,    0,    0,    0,
    6806,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6805,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6804, 6803,    0, 6802,    0,    0,    0, 6801,    0,    0,    0,    0,    0,    0,    0,
    6800,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6799,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6798,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 6797,    0,    0,    0, 6796,    0, 6795, 6794,    0,
       0,    0,    0, 6793,    0, 6792, 6791,    0,    0, 6790, 6789,    0, 6788,    0,    0,    0,
       0,    0,    0, 6787,    0, 6786, 6785,    0,    0, 6784, 6783,    0, 6782,    0,    0,    0,
       0, 6781, 6780,    0, 6779,    0,    0,    0, 6778,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6777,    0, 6776, 6775,    0,    0, 6774, 6773,    0, 6772,    0,    0,    0,
       0, 6771, 6770,    0, 6769,    0,    0,    0, 6768,    0,    0,    0,    0,    0,    0,    0,
       0, 6767, 6766,    0, 6765,    0,    0,    0, 6764,    0,    0,    0,    0,    0,    0,    0,
    6763,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6762,    0, 6761, 6760,    0,    0, 6759, 6758,    0, 6757,    0,    0,    0,
       0, 6756, 6755,    0, 6754,    0,    0,    0, 6753,    0,    0,    0,    0,    0,    0,    0,
       0, 6752, 6751,    0, 6750,    0,    0,    0, 6749,    0,    0,    0,    0,    0,    0,    0,
    6748,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6747, 6746,    0, 6745,    0,    0,    0, 6744,    0,    0,    0,    0,    0,    0,    0,
    6743,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6742,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6741,    0, 6740, 6739,    0,    0, 6738, 6737,    0, 6736,    0,    0,    0,
       0, 6735, 6734,    0, 6733,    0,    0,    0, 6732,    0,    0,    0,    0,    0,    0,    0,
       0, 6731, 6730,    0, 6729,    0,    0,    0, 6728,    0,    0,    0,    0,    0,    0,    0,
    6727,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6726, 6725,    0, 6724,    0,    0,    0, 6723,    0,    0,    0,    0,    0,    0,    0,
    6722,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6721,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6720, 6719,    0, 6718,    0,    0,    0, 6717,    0,    0,    0,    0,    0,    0,    0,
    6716,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6715,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6714,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6713,    0, 6712, 6711,    0,    0, 6710, 6709,    0, 6708,    0,    0,    0,
       0, 6707, 6706,    0, 6705,    0,    0,    0, 6704,    0,    0,    0,    0,    0,    0,    0,
       0, 6703, 6702,    0, 6701,    0,    0,    0, 6700,    0,    0,    0,    0,    0,    0,    0,
    6699,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6698, 6697,    0, 6696,    0,    0,    0, 6695,    0,    0,    0,    0,    0,    0,    0,
    6694,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6693,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6692, 6691,    0, 6690,    0,    0,    0, 6689,    0,    0,    0,    0,    0,    0,    0,
    6688,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6687,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6686,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6685, 6684,    0, 6683,    0,    0,    0, 6682,    0,    0,    0,    0,    0,    0,    0,
    6681,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6680,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6679,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    1601,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 1609,
       0,    0,    0,    0,    0,    0,    0, 6678,    0,    0,    0, 6677,    0, 6676, 6675,    0,
       0,    0,    0,    0,    0,    0,    0, 6674,    0,    0,    0, 6673,    0, 6672, 6671,    0,
       0,    0,    0, 6670,    0, 6669, 6668,    0,    0, 6667, 6666,    0, 6665,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 6664,    0,    0,    0, 6663,    0, 6662, 6661,    0,
       0,    0,    0, 6660,    0, 6659, 6658,    0,    0, 6657, 6656,    0, 6655,    0,    0,    0,
       0,    0,    0, 6654,    0, 6653, 6652,    0,    0, 6651, 6650,    0, 6649,    0,    0,    0,
       0, 6648, 6647,    0, 6646,    0,    0,    0, 6645,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 6644,    0,    0,    0, 6643,    0, 6642, 6641,    0,
       0,    0,    0, 6640,    0, 6639, 6638,    0,    0, 6637, 6636,    0, 6635,    0,    0,    0,
       0,    0,    0, 6634,    0, 6633, 6632,    0,    0, 6631, 6630,    0, 6629,    0,    0,    0,
       0, 6628, 6627,    0, 6626,    0,    0,    0, 6625,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6624,    0, 6623, 6622,    0,    0, 6621, 6620,    0, 6619,    0,    0,    0,
       0, 6618, 6617,    0, 6616,    0,    0,    0, 6615,    0,    0,    0,    0,    0,    0,    0,
       0, 6614, 6613,    0, 6612,    0,    0,    0, 6611,    0,    0,    0,    0,    0,    0,    0,
    6610,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 6609,    0,    0,    0, 6608,    0, 6607, 6606,    0,
       0,    0,    0, 6605,    0, 6604, 6603,    0,    0, 6602, 6601,    0, 6600,    0,    0,    0,
       0,    0,    0, 6599,    0, 6598, 6597,    0,    0, 6596, 6595,    0, 6594,    0,    0,    0,
       0, 6593, 6592,    0, 6591,    0,    0,    0, 6590,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6589,    0, 6588, 6587,    0,    0, 6586, 6585,    0, 6584,    0,    0,    0,
       0, 6583, 6582,    0, 6581,    0,    0,    0, 6580,    0,    0,    0,    0,    0,    0,    0,
       0, 6579, 6578,    0, 6577,    0,    0,    0, 6576,    0,    0,    0,    0,    0,    0,    0,
    6575,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6574,    0, 6573, 6572,    0,    0, 6571, 6570,    0, 6569,    0,    0,    0,
       0, 6568, 6567,    0, 6566,    0,    0,    0, 6565,    0,    0,    0,    0,    0,    0,    0,
       0, 6564, 6563,    0, 6562,    0,    0,    0, 6561,    0,    0,    0,    0,    0,    0,    0,
    6560,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6559, 6558,    0, 6557,    0,    0,    0, 6556,    0,    0,    0,    0,    0,    0,    0,
    6555,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6554,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 6553,    0,    0,    0, 6552,    0, 6551, 6550,    0,
       0,    0,    0, 6549,    0, 6548, 6547,    0,    0, 6546, 6545,    0, 6544,    0,    0,    0,
       0,    0,    0, 6543,    0, 6542, 6541,    0,    0, 6540, 6539,    0, 6538,    0,    0,    0,
       0, 6537, 6536,    0, 6535,    0,    0,    0, 6534,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6533,    0, 6532, 6531,    0,    0, 6530, 6529,    0, 6528,    0,    0,    0,
       0, 6527, 6526,    0, 6525,    0,    0,    0, 6524,    0,    0,    0,    0,    0,    0,    0,
       0, 6523, 6522,    0, 6521,    0,    0,    0, 6520,    0,    0,    0,    0,    0,    0,    0,
    6519,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6518,    0, 6517, 6516,    0,    0, 6515, 6514,    0, 6513,    0,    0,    0,
       0, 6512, 6511,    0, 6510,    0,    0,    0, 6509,    0,    0,    0,    0,    0,    0,    0,
       0, 6508, 6507,    0, 6506,    0,    0,    0, 6505,    0,    0,    0,    0,    0,    0,    0,
    6504,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6503, 6502,    0, 6501,    0,    0,    0, 6500,    0,    0,    0,    0,    0,    0,    0,
    6499,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6498,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6497,    0, 6496, 6495,    0,    0, 6494, 6493,    0, 6492,    0,    0,    0,
       0, 6491, 6490,    0, 6489,    0,    0,    0, 6488,    0,    0,    0,    0,    0,    0,    0,
       0, 6487, 6486,    0, 6485,    0,    0,    0, 6484,    0,    0,    0,    0,    0,    0,    0,
    6483,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6482, 6481,    0, 6480,    0,    0,    0, 6479,    0,    0,    0,    0,    0,    0,    0,
    6478,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6477,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6476, 6475,    0, 6474,    0,    0,    0, 6473,    0,    0,    0,    0,    0,    0,    0,
    6472,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6471,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6470,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 6469,    0,    0,    0, 6468,    0, 6467, 6466,    0,
       0,    0,    0, 6465,    0, 6464, 6463,    0,    0, 6462, 6461,    0, 6460,    0,    0,    0,
       0,    0,    0, 6459,    0, 6458, 6457,    0,    0, 6456, 6455,    0, 6454,    0,    0,    0,
       0, 6453, 6452,    0, 6451,    0,    0,    0, 6450,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6449,    0, 6448, 6447,    0,    0, 6446, 6445,    0, 6444,    0,    0,    0,
       0, 6443, 6442,    0, 6441,    0,    0,    0, 6440,    0,    0,    0,    0,    0,    0,    0,
       0, 6439, 6438,    0, 6437,    0,    0,    0, 6436,    0,    0,    0,    0,    0,    0,    0,
    6435,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6434,    0, 6433, 6432,    0,    0, 6431, 6430,    0, 6429,    0,    0,    0,
       0, 6428, 6427,    0, 6426,    0,    0,    0, 6425,    0,    0,    0,    0,    0,    0,    0,
       0, 6424, 6423,    0, 6422,    0,    0,    0, 6421,    0,    0,    0,    0,    0,    0,    0,
    6420,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6419, 6418,    0, 6417,    0,    0,    0, 6416,    0,    0,    0,    0,    0,    0,    0,
    6415,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6414,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6413,    0, 6412, 6411,    0,    0, 6410, 6409,    0, 6408,    0,    0,    0,
       0, 6407, 6406,    0, 6405,    0,    0,    0, 6404,    0,    0,    0,    0,    0,    0,    0,
       0, 6403, 6402,    0, 6401,    0,    0,    0, 6400,    0,    0,    0,    0,    0,    0,    0,
    6399,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6398, 6397,    0, 6396,    0,    0,    0, 6395,    0,    0,    0,    0,    0,    0,    0,
    6394,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6393,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6392, 6391,    0, 6390,    0,    0,    0, 6389,    0,    0,    0,    0,    0,    0,    0,
    6388,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6387,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6386,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6385,    0, 6384, 6383,    0,    0, 6382, 6381,    0, 6380,    0,    0,    0,
       0, 6379, 6378,    0, 6377,    0,    0,    0, 6376,    0,    0,    0,    0,    0,    0,    0,
       0, 6375, 6374,    0, 6373,    0,    0,    0, 6372,    0,    0,    0,    0,    0,    0,    0,
    6371,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6370, 6369,    0, 6368,    0,    0,    0, 6367,    0,    0,    0,    0,    0,    0,    0,
    6366,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6365,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6364, 6363,    0, 6362,    0,    0,    0, 6361,    0,    0,    0,    0,    0,    0,    0,
    6360,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6359,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6358,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6357, 6356,    0, 6355,    0,    0,    0, 6354,    0,    0,    0,    0,    0,    0,    0,
    6353,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6352,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6351,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6350,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 6349,    0,    0,    0, 6348,    0, 6347, 6346,    0,
       0,    0,    0, 6345,    0, 6344, 6343,    0,    0, 6342, 6341,    0, 6340,    0,    0,    0,
       0,    0,    0, 6339,    0, 6338, 6337,    0,    0, 6336, 6335,    0, 6334,    0,    0,    0,
       0, 6333, 6332,    0, 6331,    0,    0,    0, 6330,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6329,    0, 6328, 6327,    0,    0, 6326, 6325,    0, 6324,    0,    0,    0,
       0, 6323, 6322,    0, 6321,    0,    0,    0, 6320,    0,    0,    0,    0,    0,    0,    0,
       0, 6319, 6318,    0, 6317,    0,    0,    0, 6316,    0,    0,    0,    0,    0,    0,    0,
    6315,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6314,    0, 6313, 6312,    0,    0, 6311, 6310,    0, 6309,    0,    0,    0,
       0, 6308, 6307,    0, 6306,    0,    0,    0, 6305,    0,    0,    0,    0,    0,    0,    0,
       0, 6304, 6303,    0, 6302,    0,    0,    0, 6301,    0,    0,    0,    0,    0,    0,    0,
    6300,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6299, 6298,    0, 6297,    0,    0,    0, 6296,    0,    0,    0,    0,    0,    0,    0,
    6295,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6294,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6293,    0, 6292, 6291,    0,    0, 6290, 6289,    0, 6288,    0,    0,    0,
       0, 6287, 6286,    0, 6285,    0,    0,    0, 6284,    0,    0,    0,    0,    0,    0,    0,
       0, 6283, 6282,    0, 6281,    0,    0,    0, 6280,    0,    0,    0,    0,    0,    0,    0,
    6279,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6278, 6277,    0, 6276,    0,    0,    0, 6275,    0,    0,    0,    0,    0,    0,    0,
    6274,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6273,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6272, 6271,    0, 6270,    0,    0,    0, 6269,    0,    0,    0,    0,    0,    0,    0,
    6268,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6267,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6266,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6265,    0, 6264, 6263,    0,    0, 6262, 6261,    0, 6260,    0,    0,    0,
       0, 6259, 6258,    0, 6257,    0,    0,    0, 6256,    0,    0,    0,    0,    0,    0,    0,
       0, 6255, 6254,    0, 6253,    0,    0,    0, 6252,    0,    0,    0,    0,    0,    0,    0,
    6251,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6250, 6249,    0, 6248,    0,    0,    0, 6247,    0,    0,    0,    0,    0,    0,    0,
    6246,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6245,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6244, 6243,    0, 6242,    0,    0,    0, 6241,    0,    0,    0,    0,    0,    0,    0,
    6240,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6239,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6238,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6237, 6236,    0, 6235,    0,    0,    0, 6234,    0,    0,    0,    0,    0,    0,    0,
    6233,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6232,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6231,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6230,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 6229,    0, 6228, 6227,    0,    0, 6226, 6225,    0, 6224,    0,    0,    0,
       0, 6223, 6222,    0, 6221,    0,    0,    0, 6220,    0,    0,    0,    0,    0,    0,    0,
       0, 6219, 6218,    0, 6217,    0,    0,    0, 6216,    0,    0,    0,    0,    0,    0,    0,
    6215,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6214, 6213,    0, 6212,    0,    0,    0, 6211,    0,    0,    0,    0,    0,    0,    0,
    6210,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6209,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6208, 6207,    0, 6206,    0,    0,    0, 6205,    0,    0,    0,    0,    0,    0,    0,
    6204,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6203,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6202,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6201, 6200,    0, 6199,    0,    0,    0, 6198,    0,    0,    0,    0,    0,    0,    0,
    6197,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6196,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6195,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6194,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 6193, 6192,    0, 6191,    0,    0,    0, 6190,    0,    0,    0,    0,    0,    0,    0,
    6189,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6188,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6187,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    6186,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    1600,
];

/// Per-bucket XOR displacement applied by the product scramble.
#[rustfmt::skip]
pub(super) static HASH_ADJUST: [u16; 512] = [
      11, 2060,  645, 2835,    9, 2791, 2675,  557,  521,  529, 3254, 1773, 2371,  155, 4099,  575,
    1265,    3, 4125, 1032, 1488,    4,    4, 2094, 3574,   16,   74, 2181, 1481, 3182,   29, 1037,
    2603, 3141, 2722,   37,  512,  879, 2590,  560, 3616,  547, 2703, 1466, 1307, 2208,  535,   85,
     612,  100, 2966, 3567, 1208,  938,    7,   49, 3747,   44, 1918,   63,  264, 1626,  942, 1217,
     562, 1934,  158, 4099,    0, 2082,  590,  111,  174,    7,  144, 3181, 2460, 1764,  104, 4098,
     126, 2291, 1377,  688,   64,  448,  313, 4152, 1622, 1573, 1753, 2604,  668, 2063, 2788, 2800,
     881,   15,   64,  954,  981, 1108,   95,   73,   27, 2079, 1237,  229, 4098, 2130, 4097, 4051,
    3140, 3174, 4096, 2835, 1516, 2665, 3474,  582,  175, 1377, 1921, 2429,    3, 4107, 2571, 4150,
      82, 2126, 3259,  126, 2054, 3489, 4169,  614, 2572, 1282,  194,  148, 4239,  914,   66, 1729,
     554,   41,   21,    0,    7,  168,   10, 2082,  102, 4161,  481, 2152, 2763, 1629,   81, 2310,
    1601, 2292, 2548,   29, 4104, 4111, 2526, 4190, 4106, 4123, 2965, 3158, 2239,  521,  152, 1952,
    1414,  546,    6,  178,  108, 3451,  530, 2085, 4105,  528,   23, 2645, 3099, 4114,    4,  560,
      40, 4227, 4099, 2783,  518, 1839, 2283,  677, 2052,   59, 3043,  999, 1973, 1407, 2070,  466,
     337,  256,  577, 4101,  514, 2072,   28,  788, 2104,  938, 3941,  527, 1071, 1462, 2159,  110,
      81, 4116, 3235,  664, 3381, 3351, 2745, 2177, 4102,  137,  550, 1161,   18, 1285,   75, 3965,
     285, 1560, 4099, 1135, 3201,   89,    0, 2737,   75, 4107, 4147,  638,  516,  532, 2121, 1670,
    3109,    3, 1407, 2763,  162, 2809, 2663, 2298,  647,   17,   40, 1212, 2225, 1015,   56, 2139,
    4129, 1165, 2052, 2877, 2377, 2061,   47, 3607, 2631, 2610,  767, 1752, 6210,  147,  516,  226,
     821, 2092,   65, 3008, 2266,  522,   51,  516, 1680, 1303, 2650, 4174, 4103, 4147,  660, 3463,
    2203, 2881,   42, 3988,   11,  763, 1489, 2641, 4136, 2581, 3095,  544, 2237, 1411,  603, 2380,
      28, 1728, 4179, 2222, 4151, 1309, 1256, 1199, 2560, 4117,  104, 2716,  674, 4160,   86, 4200,
     608, 2189, 1657, 2529,  569,  512, 2347, 4543,  596, 1159,  648,  131, 2638,  521, 3633,  607,
     665,   10,   29, 3081, 3225, 2692, 2256, 1608,  951, 2104, 2317,   46, 1614, 2302,   63, 4119,
       1,  865,  669, 1098,  163, 4096, 2051, 4337, 2092, 1174,  131,  331,  345, 1099, 4249,  316,
    4096,   88, 3746, 2365, 2357, 3348, 4107,  377, 4101, 4562,   59, 2087, 3880, 1000,   82, 2296,
      24, 2310,  976, 2554,  419, 1320, 1793,  865, 2597, 1137, 4126, 4105,  614, 2048, 2684, 1574,
    1861, 2128,  670,  771, 2797, 2221,  560,  589, 3156, 4130, 2594, 4149, 3588, 2180, 1373,  579,
    2354, 2255, 2295, 3011, 3477, 3511, 4102,  911, 1253,   11, 3428, 2501,  105, 2009,   65,  324,
    4118, 2059, 2184, 3091,   85,   42, 3639, 2663, 3272, 2810, 1391,    3, 2061, 2064, 4125, 3324,
     535,  919,  147, 2731, 3502, 4106, 3294, 2189, 4100, 4115, 3970, 1287, 1395, 1143, 2956, 2835,
     157, 2076,  644, 4434, 3829,   32,   78,   13, 4099, 1813, 1380,   19, 2870, 2667, 4107, 2121,
       9,  550, 2456, 2605, 3275, 2413, 1290, 2063, 4085, 3840, 2445, 4098, 2125, 2627, 2713, 1232,
];

/// Class of a paired hand, indexed by the scrambled prime product.
#[rustfmt::skip]
pub(super) static HASH_VALUES: [u16; 8192] = [
    5999, 6172, 4333, 3310, 2445,  154, 5096, 2463, 4984, 5608, 4087, 3632, 2387, 5360, 2262, 5660,
     152,  177,  315,  163,  312, 6147, 3259, 6029, 5955, 3299, 4538, 2352, 2407, 4071, 3305, 2949,
    2363, 2428, 3083, 3067, 4460,  320, 2791,    0, 6145, 2097, 2423, 3322,  119, 5561, 2267, 5638,
    2116, 2426, 6129, 5965, 2265, 3303, 3315, 6162,  309, 2924, 6015, 2313, 3311, 5566, 5183,   64,
    3964, 2465, 4154, 3378, 2397, 2451, 2462,   90, 2137, 2053,  316,  175, 3066, 3138, 2307, 6020,
    5502, 5476, 2271, 5856, 5243,  302, 4792, 2950,    0, 4629, 3205, 5743, 2598, 2827, 2469, 2452,
    2431, 2464, 5395, 2717, 2732, 5903, 2875, 4741, 4023, 2408, 2195,   72, 5118, 3901, 2602,  162,
    2939, 5204, 5480, 2569, 3306,    0, 3293, 4419, 4775, 2828,    0, 4744, 4859, 5344, 3126,    0,
    1777, 5275, 3544, 3487, 6176, 5894, 2294, 5217, 3535, 5827, 3641, 2127,    0, 3004, 6178, 1739,
     287, 6174, 3240, 6009, 4716,    0, 5345, 2167, 3191, 5813, 3611, 3747, 4586, 5890, 5364, 2806,
    3648, 5350, 2838, 4929, 5075, 3764,  283,  164,  136, 5040, 5170,    0,    0, 1727, 5632, 3785,
    6141, 2824, 3226, 5963, 2554, 3881, 5684, 5505, 4441, 5907, 6138, 2296, 2461, 4389,    0, 4849,
    2121, 4858, 3863, 4298, 2983, 2595, 2847, 5659, 5347, 2248, 3153, 5588, 5487, 4806, 2122,    0,
    5073,    0, 5768, 3981, 4977, 1945, 5475, 5267, 4642, 5477, 2278, 2159,  225,  296, 6046, 3931,
    3152, 3711,  249, 1791, 2918, 5869, 5576, 5918, 5862, 4660, 2165, 4887, 2315, 5645, 3002, 5796,
       0, 5064, 5259, 5248, 4513, 5261, 6041, 5017,  183,   48, 5219,    0, 5401, 2004,    0, 2304,
    4705,    0, 3230, 5667,    0, 2001, 3821,  133, 5815, 5699,    0, 3233, 3727, 4491, 2161, 3143,
    2597, 3773, 4260, 4843, 2826, 6001, 6023,    0, 5791, 4426, 5281, 5043, 2175, 5837, 2502, 2286,
    4124, 5696, 2174, 1991, 4385,    0, 4341,    0, 3245,    0, 5977, 4879, 5459, 4856, 6075, 5430,
    5000, 2303, 2168, 2072, 4411,    0, 2305, 6030, 5355, 5855, 3628, 2282, 5287, 5264, 4693, 4432,
    2237, 4265,  114, 3123, 5830, 2295, 3239, 4248, 3807,    0, 3005,  228,  135,    0, 2467, 3250,
    5752, 5050, 2148, 5676,   99, 2136, 5323, 5840, 3385, 2069, 6052, 4496, 5371, 4310, 2005, 4329,
    3182, 3207,    0, 4205, 4644, 1994, 3862, 2317,  238, 5602, 4959, 4409, 5359, 6051,  259, 4219,
    4509, 2861, 2082, 3091, 3586, 4552, 4403,  150, 5484, 4259,  284, 2238,  290, 3115, 6012, 3852,
    5956,    0, 3472, 2583, 5276, 3046, 5260, 2158,  319,    0, 3384, 4387, 2264, 2848, 2208, 5494,
    3273, 4807, 4944,  281, 5620, 4378, 6004, 5948,    0, 4046, 2627, 1729, 4425, 2815, 3263, 5300,
     256, 6116, 3156, 6049,  294, 5697, 6136, 1797,    0, 4402, 3457, 3755, 2323, 2358,  116, 3521,
    3447, 4610, 5639, 2360, 5779, 5242, 6134,    0, 4655, 4477, 6003, 5468, 2351,    0, 2258, 3248,
     295, 4326, 6124, 3706, 5579, 5913, 4958, 5441,  216, 2344, 5258, 6071, 4300, 2477, 6053, 5404,
       0, 6112, 2845, 2300, 2201, 4539,  160, 2253, 5467, 2164,    0, 3401, 3270, 3992,  261, 5686,
    6132, 5876, 5809, 5998, 5709, 6137,  300,    0, 5469, 3090, 5984, 6117, 5914, 5861, 2203, 2655,
    2326, 6050, 2829, 5080, 3282, 6106, 3244, 1849, 5331, 1872, 4863, 2233, 3147, 5902, 5164, 6151,
    3288, 6149, 6169, 6125, 5962, 6184, 5081, 2355, 5735, 5930, 2393, 5908, 2345, 5924, 3211,  161,
    3316, 6095, 4200, 6101, 6017, 3320, 2449, 2328, 3275, 2372, 5713, 2280, 5939, 5880, 5954, 2438,
    6060,  157, 2432, 6114, 5489, 5708, 6059, 2314, 5707, 6058, 5424, 5923, 2356, 6054, 4062,  128,
     307, 5402, 5994, 4864, 5800, 5794, 6165,  158, 6140, 2435, 5888, 3192,  166, 3403, 5952, 3292,
    6164, 6086, 5524, 6019, 3016, 5085, 2343, 2916, 5654, 5742, 6135, 2442, 6143, 6146, 2399, 5302,
    3307, 4827, 2376, 3287, 3698, 1873, 6073, 2277,  140, 6163, 5885, 2293, 5679, 5515,  141, 5389,
     129, 6057, 2459, 2327,  273, 2454, 6109, 5155,  156, 6119,  301, 3284, 2373, 6055, 2357, 5832,
    2330, 2388, 2298, 4003, 2379, 5737, 5835, 5879,  149, 5694, 5739, 5405, 5941, 6007, 5633, 4625,
    2420, 3289, 4842, 5513, 5740, 2054, 5693, 5871, 2453, 5973, 3254, 5677, 5727, 5589, 2132,  271,
    5851, 6039,  304, 5996, 2698, 6031, 5820, 4808, 2907, 3849, 5519, 2135, 6040, 5603, 4829, 5372,
    4204,  106, 6032, 3232, 3578, 5988, 6066, 5169, 1939, 4103, 5981, 2429, 1767, 5928, 5860, 5499,
    2251,    0, 4701, 6047, 2892,  123, 5220, 3151, 4609, 5826, 5650, 5501, 4700, 5048, 5932, 5987,
    5172, 5596, 4830, 3366,  237, 5044, 5979, 2906, 2405, 3007, 5678, 4525, 4998, 2404, 4919, 5872,
    5831, 4758, 5356, 6068, 5266, 5990, 2252, 3086, 2367, 5076, 5942, 4845, 3012, 3571,  191, 5717,
    2587, 2574, 3529, 5829, 6048, 5821, 2925, 5916, 2311, 4853, 3125, 4482, 5079, 5453, 5495, 5398,
    4421, 3238,  292, 2444, 5980, 5782, 5297, 5483, 5892, 4498, 5720, 2337, 6033, 5788, 5283, 2133,
    4286, 5078, 3432, 5702, 5399, 5497, 2808, 4817, 2309, 5140, 4347, 5569, 3297, 3150, 4619, 3144,
    3913, 2188, 2990, 4641, 4588, 5385, 6102, 5279, 2308, 5377, 3260, 5047, 4844, 2260, 2796, 5277,
    4271,  159, 2321, 1736, 1761,   12, 3050, 4824, 5246,  165, 3104, 4549,  142, 5127, 3858,  260,
     248, 2101, 5836, 5570, 3073, 5911, 6021, 4781, 6028, 4015, 5022, 3178, 2912, 5976, 5089, 2793,
     127, 2349, 3413, 1808, 3146, 4776, 5292, 3985, 2289, 5870, 4634, 2418, 2198, 5315, 5511, 5233,
    4524, 5764, 2243, 5552, 3762, 5703, 5182, 2261, 5673, 2999, 3081, 4826, 4405, 5175, 2214, 5685,
    2249, 4962, 5818, 4197, 5159, 3228, 3760, 5582, 5691, 5905, 5541, 4835,    0, 4198, 5294, 3745,
    1757, 2981, 4163, 4017, 5574, 2821, 5263, 5901,  250, 5775, 2200, 5657, 2855, 5749, 2126, 5136,
    3765, 2919, 4353, 3602, 2359, 5473, 2227, 5049, 2716, 4186,  180, 2714,  190, 5883, 4407, 5823,
    5616, 5781, 3120, 6045, 3049, 4847, 3761, 3196, 5265, 3060, 2274, 5854, 5970, 2713, 2196, 3040,
    3944, 5780, 2134,  305, 5058, 3459, 4841, 3396, 4839, 3184, 5369, 3179, 5550, 4728, 5390, 5239,
    4995, 5806, 4600, 2389, 3957, 5352,    0, 2283, 5852, 3241, 5522, 5206,    0, 4778, 3462, 4366,
    2240, 2100, 1999, 2460, 5534, 2194, 3982, 2034, 3236, 2594, 5790, 4523, 5658,   18, 5069, 2348,
    4777, 5438, 4182, 5382, 1751, 5273, 2914, 2179, 5383, 2437, 2447, 3215, 5772, 3997, 1963, 2814,
     103,  313, 3000, 5193, 5792, 3758, 3170,  139, 6079, 3048, 4560, 2223, 5728, 5766, 5285, 3271,
    4861, 2219, 5488, 2680, 3543, 5839, 5623, 4040, 4636, 4799, 2338, 1962, 5214, 2002, 1899, 6107,
    3139, 5753, 4480, 2081, 2292, 5811, 2797, 1917, 1805, 5327, 5850, 3229, 4820, 4975, 2993, 4623,
    4963, 1789, 5592, 5208, 5557,    0, 3955, 5665, 5455,   56, 2600, 2816, 4991, 3219, 3065, 3455,
    4587, 4805, 4321, 5537, 5776, 3057, 2899, 4760, 4994, 6006, 4846, 2115,  146, 5670, 2183, 3134,
    5692, 4510, 2813, 2712, 1924,  210,    0, 5899, 5514, 3003, 3281, 4793,   17,    0, 4375, 4884,
    4739, 5612, 3968, 2430, 5388, 4559, 1807, 1935, 5690, 5607, 5101, 4803, 3540,  132, 1955, 5567,
     209, 4195,  205, 5595, 5767, 4410, 3709, 2108, 2401, 3729, 4996,    0, 5133, 2991, 3339, 5227,
       0, 4990, 4148, 4694, 2228, 5253, 5842, 4630, 2268, 4280, 2080,  272, 3113, 3923, 3342, 3255,
    5104, 4683, 2663, 2876, 3507, 4579,    0, 1717, 2178, 5418,    0, 5336, 5311, 4488, 3969, 3754,
    1981, 2231, 5067, 5917, 3527, 4521, 2381, 5180, 2205, 4168, 4105, 5587,    0, 5254, 2576, 6120,
      15, 2055,    0,   78, 2234, 2702, 4573,    0, 4368, 4595, 5465,  112, 5750, 3020, 3055, 2020,
    4802, 4999, 1932, 3262, 6183, 3594, 2909,    0, 4851, 5451,    0, 1697, 2901, 4191, 5822, 5378,
    3928, 2273, 3338, 5934, 5332, 4558, 1907, 3177, 2218, 2566,    0, 4953, 2700, 3832, 5262, 3495,
    5949, 4818, 4922, 4169, 4980, 2989, 1896, 5985, 3280,  143, 4369, 3335, 5472, 4593, 6093, 1870,
    4689, 5493,    0, 2683, 3963, 3216,  113, 4751, 4102, 3001,    0,    0, 6156, 5641, 4687, 4338,
    4263, 3054, 3024,  298, 4143, 4890, 5564, 5704, 2739, 2903, 2975, 4815, 6061, 2599, 5366, 4295,
    3538, 5810,    0, 6062, 5142, 2795, 5573, 4475, 3158, 3847, 2695,  189, 6099, 5975, 5216, 5433,
    4604, 4923, 5986, 4598, 5873, 4773,    0, 2737, 5411, 5929,    0, 5729, 3751, 6011, 2775, 4081,
    4666, 4973, 3927, 3272, 4097, 2563, 4307, 2450, 5546, 5529, 5460, 2951, 2066, 4155, 2908, 4196,
    2800,  102, 4500, 5995, 5748, 5662, 3167,    0, 1859, 4257,    0, 4149, 4899, 4489,    0,    0,
       0,    0, 5016, 4612, 1952, 3047, 4279, 4255, 6010, 6150,  235, 4519,  100, 2755,    0, 4972,
    3926, 2226, 5342, 3777, 3098, 2810, 1864, 3061, 4606, 5462, 1893, 2110, 2160, 5746, 5614, 5801,
    3776, 2509, 3883,    0, 4889, 5132, 4074, 5380, 4952,    0, 5619, 5606,    0, 3235,    0,  169,
    4398, 4608, 4957,    0, 3395,    0, 5445, 6155, 3074, 3588, 5611, 3398, 6056, 1741, 2530, 4039,
    5286, 5238,    0, 5328, 1877, 2998, 4691, 2575, 4580, 4037, 2288,    0, 5598, 3353,    0,  201,
       0, 4766, 2676, 1977,    0, 2584,    0,    0, 4179, 4685, 3998, 6115, 5560, 5304, 5549, 2972,
     229, 2774, 3202, 4554, 3323, 2609, 5841, 3704, 2434, 3582, 3121,    0,  266,  172, 2545,  124,
    3028, 4822, 3166,  308,    0, 2656, 3412, 3488,  246, 4631, 4985, 5803, 2749, 1940, 2347, 6084,
    4814, 3797, 1787, 5192,  197, 4383, 5052, 4568, 3537, 2217, 4754,    0, 4240, 3560, 4928,    0,
    5368, 5329, 2664, 1735, 3756, 5992,    0, 4865, 3444, 3684, 2900, 2537,   54, 4837, 2959, 1988,
    3555, 4478, 2764, 4412, 1806, 3247, 2660, 2982, 3976, 6038, 5406,    0, 1912, 5317, 4605, 5033,
    4270, 2106,    0, 4118, 4626, 3294,    0, 5933, 4545,  126, 4769,  217, 4175,    0, 5335,    0,
    2518, 3910, 4090, 3850, 6002,  212,    0, 2010, 5330,    0, 4190,    0, 3618,  107,    0, 3227,
    5507, 2621, 5741, 2146, 2063, 5627, 3190, 3938, 5464, 6154, 5351,    0, 5540, 5157, 3078, 3222,
    5643, 2285, 2090, 5014, 5618, 5648, 2652,    0, 2058, 2920,  279, 2504, 4966, 5176, 5761, 5617,
       0, 4892, 5324, 5413, 4394,  278, 3345, 5900, 5812, 4364, 5299, 3346, 1993, 3218,   81, 2946,
       0, 3680, 3749, 5983, 3088, 5198, 2590, 5584, 3400,  286, 3855, 4359, 5471,    0, 3009, 3076,
    5391, 5553, 4172, 2346, 5103, 4578, 2235, 3867, 3295,    0, 3983, 5068,  236,  240, 2874,    0,
    5054, 2970, 3089, 4950, 2173, 2222, 5492, 5031, 3261, 3508, 4722, 4955, 3300, 2016, 1691, 2752,
    5226, 2177, 4906, 3753, 2893,    0, 2396, 2588, 6123, 4937, 4992, 2172, 4505,    0, 1842, 5938,
    3925, 2640, 2526, 4852, 4256, 3523, 4334, 4299, 5386, 4380, 5431, 3885, 3819, 5953, 4331, 5284,
    2802, 4875, 2888, 3900, 4659, 3149, 1821, 4362, 5481,  275, 2489, 2525, 2064, 2665, 5601, 3929,
    3140, 1989, 3556, 2794, 3252, 5463, 2724,    0, 2184, 2564, 3321, 2299, 1983, 5124, 5959, 2013,
    4949, 2984, 2482, 5376, 3532, 3744, 2215, 2153, 4738, 4526,    0, 2113, 1636, 4909, 4801, 4898,
    1928, 2443, 3576, 3522,    0, 5200, 3333, 4613, 5034, 2961, 5397, 4254, 2052, 5381, 3918, 3707,
    3840, 2060, 3176,  268, 4616, 5533, 3942, 5444, 4374, 4343,    0, 2036,    0, 4401, 2694, 1633,
    5765, 5012, 3175, 3767, 2439, 2807,    0, 6014, 6160, 4651, 4599, 1858, 1740, 5037, 2089, 2580,
    2210, 4550,    0, 4562,  130, 1869, 2091,    0, 3490, 3739, 4481, 5213, 4901, 2593, 3864, 3492,
    4083,    0, 5774, 5314, 4354, 2902, 3603, 4627, 4115, 5675, 2209, 5218, 3157, 4113, 2960, 4632,
    3075, 5651, 5586, 5714, 4934, 5635, 3234, 2099, 5162,  289, 2675, 5964, 3257, 2436, 2395, 5005,
    4832,  297, 3509, 3877, 5211,    0,    0,    0, 4258, 3674, 4384, 2225, 1667, 1885, 4067, 3387,
    4465, 5754, 3082,  147, 6067, 1867, 2310, 3999, 3645, 2978, 4804, 4748,  282, 1830, 4765, 4386,
    2287, 5967, 5770, 4794, 2884,    0, 5719, 4679, 2427, 2768, 3117, 5756, 2995, 3242, 3319, 2191,
       0, 4854, 5542, 5165, 3085, 2835, 4911, 2466, 3743, 3961,    0, 2778, 5236, 4289, 4582,  224,
    4729, 2701, 5138, 2929, 2120, 3616, 6096, 5346,    0, 5906,   13, 2487, 3045, 3425, 5559, 1798,
    2699,    0, 4954, 1649, 3118, 1984, 4188, 4812, 5974, 5626, 1647, 6077, 4913,    0, 4088, 5491,
       0, 3970,    0, 5799, 4390, 4146, 5721, 5958,    0,    0,    0, 2281, 2417, 5393, 6166,    0,
    4840,  215,    0, 4176, 2891, 3691, 5535, 3823, 2725, 3220, 3772, 4978, 5252, 5634, 3974, 4551,
    3846, 3871, 5482,  258, 5637, 5525,  276, 4904, 5149,    0, 6104, 4170, 2544, 6157, 5007, 4787,
    6016, 5209,    0, 6126, 5797, 2369, 4336, 1835, 4757, 2189, 4561, 3960,    0, 6094, 6171, 1953,
    4785,    0, 1959, 3599, 2216, 3919, 4788, 4767, 4250, 3694, 2577, 3678,    0, 5849,   32, 5937,
    3164, 5443, 2840, 5647, 3990,  247, 4695, 5167, 4001, 5245, 5520, 2040, 3965, 2596, 2446, 3221,
    2291, 2786, 5298, 2250, 6070, 5028, 2049, 4187, 2147, 4174, 4637, 3197, 3930, 5997,    0, 3958,
       0, 3069, 3959, 4979, 2922, 1619, 5653, 2402, 5972, 3558, 5163, 2398, 5571,    0, 1698, 2689,
    3448,    0, 3716, 4908,    0, 1895, 4581, 5878, 5070, 5838, 2032, 3145, 4993, 2476, 5498,    0,
    4935,    0,    0,    0, 2301, 4129, 2756, 4064,  101,    0, 5935,  155, 2364,    0,  285, 4671,
    5293, 2180,    0, 6168,    0, 1780, 5387,   79, 2015, 4639, 4365,    0, 3880, 5680, 5798,    0,
    5723, 2974,    0, 4971, 5045, 2823, 2514, 5625, 5805, 2362, 4813, 5868, 1923, 1693, 2931, 4144,
    2578, 4325, 2895,    0, 3705, 2213,    0, 2833, 4128, 2692,    0,    0, 1750, 2419,    0, 3542,
    1738,  108,    0,  314, 2322, 4622, 1793, 4567, 6110, 2024, 3768, 4988, 3464, 2378, 3362, 1781,
    3536, 6170, 5307, 4339, 4225, 6034, 3504, 3786, 4444, 3724, 2111, 2406, 1769, 2144,    0, 3214,
    5875, 5580,    0, 3666, 5178, 1968,    0, 5961, 5083, 5027, 5105, 2382,    0,  255, 2519, 4123,
    4555, 3135, 3449, 3079, 2272, 5910, 2154, 2852, 5624, 2934,  121,  257, 5669, 4779, 5348,    0,
    2302,   83,    0, 4833, 6090,    0, 3052, 6113, 2098, 4920, 2412, 5122, 4201, 3643,    0, 5895,
       0,    0, 6175,    0,    0, 3714, 5615, 3491, 4117, 3967, 4164, 2708,    0, 5442, 3783, 2170,
    4253, 5516, 5088, 3500, 2703, 1801, 3268,    0, 3309, 5957,    0, 5379, 3105, 2057, 2187,    0,
    4220, 3210, 5001,    0,    0, 5828, 4528, 5738, 5474,    0, 2780, 2709, 5668, 1732, 5848, 2923,
       0,  311, 3423, 3217,    0, 3200, 5528,    0, 5093, 5730, 4860,    0, 1840, 5575, 5270, 2190,
       0,    0, 5490, 3591, 3607, 5562,    0,    0, 4924, 5867, 5845, 1800, 3424, 3989,    0, 2881,
    2241, 4471, 4114,   70,    0, 5195,    0, 4709, 2105, 5280, 3631, 2117, 1845, 5046, 3141, 4704,
     317, 2380, 4035, 2059, 5807, 2994,    0, 5098,    0, 3379,    0, 3206,    0,  223,  153, 2433,
    3199, 5036, 5597, 1903,    0,    0, 5824, 4855, 4239,  115,    0,    0,    0, 2368, 5322,    0,
       0, 3267, 3372,    0,    0, 1881, 4241, 6078, 3025, 2071, 3741, 3934,    0, 5429,    0, 2247,
    2353,    0, 3887, 3474,    0, 3154, 4479, 2232,    0, 4222, 1841, 4138, 4710, 1681, 5736, 4796,
    2484,    0,    0, 3530,    0, 2324, 4517, 4825,   73, 4914, 6083, 3391,    0,    0, 2763,  125,
    3251, 3111,    0, 5422,    0, 3336, 1938, 3058,    0,    0, 4110, 2169, 2224, 5674, 2759, 2976,
    5161, 5874, 4970, 5687,    0,    0, 5577, 4620,    0,    0, 3891, 2992,   11,  204, 1684,    0,
       0, 1640, 4034, 3181, 5915, 4294, 5816, 5321,    0,    0,    0, 3187, 2479, 4497, 4577, 5423,
    1645, 2516, 6069, 4678, 5591, 4597, 5672, 5478,    0, 4373, 5646, 3137,    0,    0, 3562, 1937,
    2480, 5274, 5814,    0, 3160, 4688,    0,    0, 4831, 3068, 1927, 5652, 1623, 2553, 3605,    0,
    5029, 2220, 2753,   95, 6024,    0, 5545, 5590, 2229, 2339, 2798,    0, 2890, 2611,    0, 2539,
    6089,    0, 2898, 4459, 6152, 4357, 2819, 3905, 1954, 4910,   96, 1982, 1802, 2882,    0, 3102,
    4420, 2654, 5695, 2104, 3208, 3503, 3922, 3600, 2284, 2948,    0, 5414, 1934, 4752,    0, 2894,
    2718,    0, 2366, 6022, 1910, 4576, 1829,    0, 2817, 5978, 2801, 5452,    0, 5102, 3193, 5896,
    4005,    0, 1961, 2573,    0, 3015, 3720, 1839, 5400, 4010, 2866, 4245,    0, 2706, 1862, 5055,
    3763,    0, 5925,    0,    0, 6087, 2650, 6142, 5457, 5760, 4162, 2341, 4232, 5129, 3110, 3771,
       0, 5244,    0, 4228, 2325,   82, 4897, 5179,    0, 5415, 3023, 5518, 3994,   51, 4430, 5065,
    3824, 5629, 4377,    0, 5421, 3301, 3258, 6159, 3725,    0, 2458,    0, 3485, 1722, 1611,  274,
       0, 5111, 3740, 3935, 3286, 5320, 2079, 3100, 5722, 5305, 3308, 6158,    0, 3581, 2409, 5857,
    6181, 3212, 3314, 3008, 5858, 2457, 2455,  117, 5947, 4723, 3017, 2415, 5202, 5778, 5184, 3519,
    3092, 2269, 5886, 6085, 2440, 2809, 3908, 2783, 5015, 6185, 3094, 2425,    0, 1815, 6127, 2361,
    4891, 3662, 1863, 2491, 2581, 4504, 5154,    0, 5011, 3304, 3722, 5340, 2485, 4418, 6044, 2494,
       0, 3734, 2867, 4424, 6121, 2336, 4772, 3598, 1753, 6081, 5944, 3312,    0, 5074, 1786, 4030,
    2818, 1783, 4320, 6063, 2411, 2000, 4319, 2726, 2691, 4116, 6167, 4621, 2837,    0, 2915, 1894,
    5700, 4290, 1911,    0, 2192, 5319, 3470, 3256, 5325, 1626, 5536, 5117, 3344, 3329, 3071, 2266,
    3557, 2371, 3416, 2212, 5333,    0, 5884, 3285, 5301,    0, 5960, 5882, 5290, 5353,    0, 5291,
    3735, 5373, 3128, 4989,    0, 4006, 2065,  214,    0, 2332,    0, 5071, 3636,    0, 3116, 2896,
    1702, 5523, 2182, 2316, 1703,    0, 4022,    0, 3277, 5408, 3826, 5426, 5544, 3169, 3189,    0,
    5147, 3390,    0, 4075, 3155, 4483, 3109,    0, 3483,   92, 1852, 3506, 2088, 5982, 5644, 3223,
    3597, 5448,    0, 2897, 1630, 3053, 3940, 6103, 3377, 2245, 3269, 3198, 3984,    0,    0, 3350,
    6097, 2555, 4965, 5435,    0,  104, 3203, 1686, 5116, 3364, 5357, 5268, 5510,  134, 3750, 5784,
    2067, 4529, 5877, 3298, 4038, 4730,    0, 5205, 3861, 3625, 6013, 5072, 3814,    0, 2166, 5769,
    4640,  122,    0,   74,    0, 4658, 2152, 4312, 5503, 2197, 5912, 3902, 3703, 6128, 5610, 5640,
    3646, 2416,  265, 1655, 5403, 4684, 2935, 4452,  131, 5922, 3168,   39, 5666, 4059, 4624, 6000,
    2414,  306, 5833,   69, 3723,    0, 6148,  245, 5221, 4964, 2061,    0, 3677, 3185,    0, 2674,
    3296, 4036, 3466, 3563, 6180, 4782, 4942, 5251, 2969, 5843, 3186, 3318, 5943,    0,    0, 3817,
    5349, 1987, 4736, 3518, 2910,    0, 4467, 2687, 4947,    0, 3107, 4878, 2977, 4883, 4907, 3334,
    5731, 3565, 5755, 6025, 1898, 5808, 2257, 5456,    0, 4464, 3243,  145, 5062, 4870,    0,    0,
    4417, 3950, 4797, 5250, 3376,    0, 2456,    0, 3368, 5921, 2421, 5558, 2025, 2236, 5834, 4533,
     234, 1700, 5795, 2374, 4078, 5538, 2003, 5968, 1628, 5051, 3131, 2422, 4540, 3731, 5724, 5234,
       0, 5256,    0, 3161, 1644, 3209, 4305, 2448, 3036,    0, 5793, 1676, 3452, 3953, 5989,    0,
    3810,    0,    0, 3276, 3388, 5583, 5512, 1690, 5904, 3084, 3127, 4848, 1820, 6088,    0, 3769,
    2276, 2968, 1922, 5500, 5454,    0,  148, 3013, 2777, 6131, 4874, 5532, 4534, 3534, 3738, 4065,
    4809, 4249, 5604, 5508, 2129, 4699, 6153, 4404, 4745, 5726, 5447,    0,    0, 3924, 4546, 2921,
    5420, 5255,    0, 2131,  202, 3422, 1678, 5137, 5762,    0, 2628, 2230, 3520, 5269, 3225, 2318,
    3077, 5185, 3458, 3688, 5951, 2765, 4229, 2522, 2904, 5084, 5568, 4226, 3671,    0, 2812, 4142,
    3278,    0, 4473, 4986, 3302, 5224, 4536, 3274, 1673, 4516, 3689, 4045, 1724, 5466, 1737, 2193,
    4743,  198, 2171, 3886, 5887, 4111, 1950, 5135,    0, 4423, 3859,    0, 5006, 4315, 3897, 2383,
    3790, 1634, 4733, 2624,    0, 1868,    0, 6105, 4494, 1812, 2073, 4399,   36, 5425, 1639,  226,
       0,    0, 5092, 1936, 2715, 3559, 3613, 4532, 3781,    0, 5174, 3596, 3461,    0, 1715, 2270,
    3865, 4672, 3106,    0, 2092, 5461,    0,    0, 3977, 5543, 3360, 2185, 3059, 2499, 5945, 3283,
    2078, 5819, 5993, 3476, 1822,    0,    0, 3890, 5141, 5600, 2319, 3525, 4948, 2820, 5802, 4628,
       0,    0, 4166,    0, 2128, 2696, 5554, 1995, 4903, 4698, 4007, 4654, 3411, 3547,    0, 5436,
       0, 3973, 2549,    0, 4079, 5785,    0, 3614, 5024, 1975, 5897,    0,    0,    0, 3132,   97,
    4668, 4873, 2585, 5642, 4393, 5146, 4798, 4918, 5374, 4838, 3386, 4544,   93,    0,    0, 3820,
    5018,    0, 4388, 4061, 2275, 2803, 3064, 2112, 4130, 2643, 3099, 4048, 4272, 2889, 4518, 4468,
       0, 4313, 4238, 4786,    0, 3484, 5817, 2130, 4708, 5053,    0, 1969, 5303,    0, 5131, 3172,
      25, 1960, 5804, 2653, 5212, 4780, 4763, 4617, 2026, 5450, 4615,    0, 2572,    0, 2589, 4943,
     211, 4930,    0, 1653, 3183, 3580,    0, 5757, 2682, 2784, 4141, 4905, 4372, 4735, 4145,  242,
    5572, 3742, 4795,    0, 3907,    0, 5008,    0,    0, 2028, 5126,  144, 2103, 5786,    0, 3728,
       0,    0, 2118, 6064,    0,    0, 3044, 3419, 2517, 2570, 4656, 5449, 2911, 4261,    0, 5971,
    1755, 2917,    0, 1978,    0, 5392, 6027, 5630,    0,    0,    0, 4614, 4379, 2199, 4082,    0,
    5125, 2056, 3956, 1916,    0, 1708, 2985, 4297, 5240, 3195, 5950, 5056, 1748,    0, 2930,  195,
       0, 2666, 4209, 2973, 4192,    0,    0,    0,   94, 5427,    0,    0, 5927,    0,  233, 5337,
    5847,    0, 2181, 4349,  110, 4696, 2515, 4025, 4951, 5712, 4732, 5121, 5181, 3681,    0, 4210,
    2155, 4160, 5128, 3842,    0, 3063, 4047,    0,    0, 3019,    0, 5032,    0, 3619, 5470,    0,
    2329,   41, 3051, 5681,    0, 1804, 2571,  288,    0, 1921,    0, 5628, 3173, 5789, 4926, 2565,
    2634,    0, 4057,    0,    0, 5853,   91, 5763,    0,    0, 3803, 4202, 2958, 2693, 5112,    0,
    5715,   80, 1792, 5585, 3972, 4277, 2263, 4422, 2548, 5197,    0,    0,  120, 2940, 4159, 4886,
    2872, 4080, 4458,    0, 4361, 2668, 4727,  270, 4522, 2254, 2719, 5384, 5313, 4866, 2776, 3237,
    3774, 3505, 4960, 2785, 2141,    0, 3027, 5237, 2685,    0, 1998, 4585,    0, 3962, 3895,    0,
       0,    0,    0, 5605, 2871,    0, 3056, 3129, 4702,    0, 2620, 4896, 5440, 1997,    0, 3909,
       0, 4400, 4927,    0, 4936, 1971, 2312, 5021, 3730,    0, 5751, 2659,  111,    0,    0, 5365,
    3679, 5486,    0,    0,    0, 4213, 2107, 5578, 4976,    0, 4543, 4235, 5706,    0, 1731, 5241,
       0, 6043, 3463, 2211, 5023,    0,    0, 3533, 3514,    0, 4437, 1671, 6065, 2163, 5177,    0,
    3331, 2162, 5417, 5370, 5223, 4663, 5517,    0, 6018, 2534, 2041, 5547, 4474,    0,    0, 4451,
    4737, 2844, 4740, 5594, 2114,    0, 4337,    0, 2971,    0, 4956,    0, 1926, 5030, 4646,    0,
    3845, 4742,    0, 1871, 3327,    0,    0, 5341, 3479, 5123,    0, 5166, 2789, 3669,    0, 3165,
    1931, 4882,    0,    0,    0, 5038, 1990,    0,    0, 3757, 4941, 5548, 3062, 4283, 2648, 3038,
    1865,    0,  269, 5412, 3337, 4224,  167,    0,  213,    0,    0, 2928, 3130, 3415, 3374, 4303,
    2804, 2582,    0, 4181, 4285,    0,    0, 2944,    0,    0, 5593, 6072,    0, 3451, 6122,    0,
    5844, 5097, 5061, 5689, 2705, 2068,    0,  151, 1933, 6144,    0, 2206, 2883, 2707, 4381, 3921,
    3043,    0,    0,    0, 2962,    0,    0, 5846,    0,    0, 5725, 3231, 4185, 1897, 5661, 2386,
    2290, 2697, 5479, 4571,    0, 5339, 5215, 5228, 1707, 3213,    0,    0,    0,    0, 3943,    0,
    5156, 1759, 4026, 3802,    0, 3996, 3122,    0, 6092, 3159, 3726, 3915, 4512,    0, 5396,    0,
    4085, 2742, 5940, 5432, 4566, 5367, 4823, 5758, 4344,  137, 1659, 4645, 2568, 3954, 3264, 4665,
    4352, 5271,    0, 3482, 5969, 5362,    0, 1809,    0, 3114,    0, 1763, 5521, 2481, 4764, 3574,
    5312, 5428, 2006,    0,  310,  322, 2204, 6182, 2543, 5889,    0, 5636,    0, 6042, 5310, 2176,
      65, 2403,    0,    0, 3818, 3896, 1857, 2523, 4301,    0, 4413, 4367, 5148, 2441,    0, 3499,
    4093, 4583, 3531, 5168, 4572, 4997, 3545, 2125,    0,    0, 4137, 1884,    0, 3119,    0, 1712,
       0,    0, 4119, 4594, 2096,    0,   24, 4233, 3511, 4712,    0,    0, 4020, 3971, 4869, 3070,
    3358, 3683,    0, 2471,    0,    0,    0, 2524, 3332, 2046, 5710, 3441, 1617,    0, 3658, 2392,
       0, 3087, 4208, 3382, 2246,    0,    0, 3813, 5555, 4121, 2605, 4819, 5777, 6026, 2385,    0,
    4150,  192, 3042, 1951, 5439, 5530, 4915, 2051,    0, 4520, 2156, 2562, 3835, 5010, 1746, 2207,
    4395,    0,    0, 4335, 4603,    0, 5866, 2772,    0, 4834, 2095, 1946, 2579, 4553,    0, 3860,
       0,    0, 3622, 2123, 5225, 5865, 2157, 2729,    0, 4821, 3317,  321, 4189, 5416, 5394, 1779,
    4514, 6076, 4556, 2967,    0,    0, 2773, 6005, 4178, 4476, 3664, 3685, 5130,    0, 5688, 4269,
    5893, 2488, 5745, 1685,    0, 5257, 4376, 2505, 2256,    0,    0,    0, 3224, 2927, 3894, 1967,
    3180,    0, 5229,    0, 4392, 4348, 4557, 2391, 1775,    0, 5531, 4770, 5235,    0, 6035,  109,
       0, 4183,    0, 5526, 2630,    0, 1944,    0, 5407,    0, 5020,    0, 4360, 1888, 2151, 1930,
    5199, 4515,    0,    0, 1675, 2657, 3486,    0, 4184, 4346, 3246,    0, 3142, 5160, 4165, 3828,
    5173,    0, 6036, 2633, 4029, 3615, 1776, 1694,    0, 3831, 2027,    0,    0, 2150, 1796, 5109,
    3805, 5077,    0, 2532,    0, 5338, 2297, 2625, 2986, 5358, 1643, 1996,    0, 2790, 3546, 5613,
       0,    0, 3898,    0, 2825,  200, 1902,    0,    0, 4774, 2618,  105,    0, 6177, 6173,    0,
    2050,    0, 4931, 2333,    0, 5203,    0, 5565,    0,    0, 4177, 2632, 4158, 3583, 1716, 3988,
    3642, 5664,    0, 3917, 5759,   38, 5966, 5732, 4134, 5771, 4127,    0, 2202, 2520, 1904, 5035,
       0,   98, 4635, 2799, 2690, 4084,    0,    0,    0,  251,    0, 4643,    0, 3746, 5898, 2142,
    1642, 3489,    0,  231,    0,    0, 1721, 3759, 2669, 5230, 2862,    0,    0, 3946,    0, 5581,
    4836, 2239, 2533,    0, 4982,    0, 5066, 5539, 2988, 4316,    0, 1986,    0,    0, 4734,    0,
       0,   34, 2350, 1846,    0, 5059, 3524, 3945, 3408,    0, 5409, 4638, 3037, 4469, 1816, 2885,
    2987,    0,    0, 2710,    0,    0, 4153, 3330, 4455, 5191, 4912,    0, 4358, 5232, 4692, 3708,
    3815,    0,    0, 4607, 5716,  293, 4397, 5599,  203,   89, 4667, 5247, 2841, 1692,    0, 1621,
    3101,    0, 2109, 5864,    0, 3966, 2340,    0,    0,    0, 3313,    0, 5119,   30,    0, 3869,
       0,    0,    0,    0, 3471,    0, 4345,    0,    0,    0,    0,    0, 4761,    0,    0,    0,
       0,    0,    0, 4450, 4016,    0,    0,    0,    0, 2870,    0,    0,    0, 1754,    0,  173,
    5249,    0,    0,    0, 2094,    0,    0,    0, 3676,    0,    0,    0,    0,    0,    0,    0,
       0,    0, 4448, 2503,    0,    0,    0,    0,    0, 2018,    0,    0,    0,    0, 4287,    0,
       0,    0,    0, 3370,    0,    0,    0,    0,    0,    0,    0,    0, 4063,    0, 1650,    0,
    1635,    0,    0,    0,    0,    0, 3629,    0,    0, 1861,    0,    0,    0, 4657,    0,    0,
      76,    0, 4000,    0,    0, 3838,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0, 1742,    0,    0, 1970,    0, 3854,    0, 1851,    0,    0,
       0,    0,    0, 3604,    0,    0,    0,    0, 5194,    0, 3812, 5009,    0,    0,    0,    0,
       0, 1734,    0, 2782,    0,    0,    0,    0, 4447,    0,    0,    0,  196,    0, 3383,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 4725,    0, 3041, 4811,    0,    0,
    3665,    0,    0,    0,    0,    0, 3809, 5222,    0, 3517,    0,    0, 3663,    0, 3839,    0,
       0,    0,    0,    0,    0, 2658, 4328,    0,    0,    0,    0,    0,    0, 3404,    0,    0,
    2478,   61, 1719,    0,    0, 3713,    0,    0,   88,    0,    0,    0, 1641, 1943,    0,   57,
       0,    0,    0,    0,    0, 3494,    0, 4939,    0,    0, 2727,    0, 1966,    0,    0,    0,
       0, 3800,    0,    0,    0,    0, 3733,    0,    0,    0,    0, 2770,    0, 1705,    0, 4531,
    2842, 1906, 1749,    0,    0,    0,    0,    0,    0, 5115,    0,  241,    0, 4713, 1925,    0,
       0,    0,    0, 2953, 4485, 4894,    0,    0,    0,   59,    0,    0,    0,    0, 4051,  303,
       0, 3841,    0, 3941, 4296,    0,    0,    0,    0,    0,    0, 2857,    0,    0,    0,    0,
       0, 2500,    0,    0,    0, 4207,    0,    0,    0,    0,    0,   63, 1669,    0,    0,    0,
       0,    0,    0,    0, 1853, 1683,    0,    0,    0,    0, 2943,    0, 3653,    0,    0, 4669,
       0,    0,    0,    0,    0,  222,    0,    0,    0,    0,    0,    0,    0, 1632,    0,    0,
    3952,    0,    0,    0,    0, 3420,    0,    0,    0,    0,    0, 3564, 4206,    0, 2932,    0,
    4721, 4024,    0,    0,    0, 3882,    0,    0,    0,    0, 2887,    0,   45,    0,    0,    0,
       0,    0,    0,    0, 4221,    0,    0, 1695,    0,    0,    0,    0,  232, 3936,    0,    0,
       0,    0,    0, 4981,    0,    0,    0,    0, 2529,    0,    0, 4099,    0,    0,    0,    0,
       0, 1743,    0,    0,    0,    0, 4276, 3249, 4662,    0, 4086, 6108,    0, 1819, 4535,    0,
       0,    0, 3799,    0,  171, 2498, 3920,    0,    0, 4933, 3766,    0,    0,    0,    0,    0,
       0, 1747, 1726, 2139,    0,    0, 5683, 2771, 6080,    0,    0, 3201, 1880,    0,    0, 4686,
       0, 4140,    0, 3072, 5158, 1610, 5308,    0, 1660,    0,    0,    0,    0,    0, 3097,    0,
    2720, 5082, 5509,    0,  262, 1844, 6139, 5919, 2843,    0, 4726,   53,  138,    0, 2370, 5718,
    5655, 3266, 5622, 2279, 5946, 5733,   77,    0,    0,    0,    0, 6008,    0, 2342, 1760,    0,
    4293, 4069,    0, 3624,    0, 2830, 3093, 6100, 2424, 2400,    0, 2320, 2384,    0, 2410,    0,
       0, 6091,    0, 3659,    0,    0, 3279, 3324, 5120, 2390, 2413, 1920, 5504, 4066, 2375, 6037,
    5881, 5926, 3204, 5734,    0, 4783, 3148,    0, 4042, 3325, 1974,   14,    0, 4670, 5920, 2354,
       0, 6161, 6133, 3006, 6118, 1882, 2377,    0,    0,    0, 1915, 6098, 2394, 2335,    0,    0,
       0, 5002,    0,    0,    0,    0,    0,    0,  318,    0, 2331,    0,    0,    0,    0, 3568,
       0,    0,    0,    0, 4324,    0, 5909, 1765, 4203,    0,    0, 1615, 2306,    0,    0,    0,
    2677,    0,    0, 2334,    0,    0, 3710,    0, 3567,    0, 2259,    0,    0,    0, 3875,    0,
    4969,    0, 4810,    0, 1714,    0,    0, 4750,    0,    0, 3843,    0,    0,    0, 3291,    0,
    5458,    0,    0,    0, 3468,    0, 3870, 2255,  184, 2365, 1876,    0, 5698,    0,    0,    0,
      22,    0, 3516,    0, 4507,    0,    0,    0,    0, 3375,    0,    0, 4633,  291,    0,    0,
    1677,    0, 5026,    0,    0,    0,    0,    0, 3634,    0, 2512,    0,    0, 5087,    0,    0,
    3975,    0, 5295, 5701,    0,    0,    0,    0, 5787,    0, 4011,    0, 4351,    0,    0,    0,
    3188, 3080,    0, 4862,    0, 3889,    0,    0, 2102, 4719,  299, 2511,    0,    0,    0, 4565,
       0,   20, 4308, 4008, 5859, 5931, 5288,    0, 3554,    0, 3736, 2221, 3579, 5705, 3011,  179,
       0, 3328,    0,    0, 4414, 5936,    0, 5282,    0, 6082, 5621,    0, 6111, 4309,    0,    0,
       0,    0, 3010, 1613, 1837,    0,    0,    0,    0, 3290,    0, 1980, 2734, 5296, 3833, 5863,
    1834, 5354,  244, 5783, 3779, 3593, 5139, 5063, 4590,  118, 1788, 5434, 5609,    0,    0, 2474,
       0, 2070, 3136, 4589, 3621, 5485, 6074, 5891,    0, 2538,    0, 4415, 2952,    0,    0, 4292,
       0,    0, 4291, 3660, 3465, 4850, 4676, 3133, 3978,    0, 4214,   27,    0, 3171, 4961, 1657,
       0,    0,    0, 4076,    0, 5563, 3701, 5496,    0,    0, 1728, 4194, 4211,    0, 2913,    0,
    5991, 2822, 6130,    0,    0,    0, 2905, 3194, 5656,    0,    0, 2635,    0,    0,    0,    0,
    4109,    0, 4881,    0,    0, 2242,    0,    0, 3265,    0,    0, 2926, 2850,    0,    0, 3014,
       0, 3541,    0,    0,    0, 1811,    0,    0,    0,    0, 4916,    0,    0, 5671, 3373, 4199,
    5134, 5711, 1854,    0,    0,    0,    0,    0, 5289,    0, 1771,    0, 4790,    0, 3980, 3343,
       0,    0, 1874, 4416,  227, 2649,    0,    0,    0,    0,    0, 5025,    0,    0,    0, 2076,
    5825,    0,    0, 3695,    0,    0,    0, 2567,    0,    0,    0, 4917, 1909,    0, 5437,  187,
       0, 5419,  182,    0,    0, 2186,    0, 3561,    0, 3879,    0,    0,    0,    0, 3039,    0,
    5278,    0,  280,    0, 5060, 5744,    0, 3552, 2244, 5042, 4462,    0,    0, 5506,    0,    0,
       0, 5039,    0, 5682,    0, 4304,    0, 2601, 2686,    0,    0, 3442, 3253, 1658,    0,    0,
       0,    0, 4055, 4618,    0,    0,    0, 2736,    0, 6179, 2860, 2591,    0,    0,    0, 3937,
    2743,    0,    0,    0,    0, 2754,    0,    0,    0,    0,    0, 2704, 2031,    0,    0,    0,
    1651,    0,    0,    0,    0,    0, 3606,    0,    0,    0, 4311, 3903, 4002, 1941, 4828, 2996,
    3577,    0, 4486,    0,    0,    0,    0, 5773,    0, 4049, 5551,    0,    0, 1744,    0,    0,
       0,    0,    0, 3548,    0,    0, 2638,    0,    0, 4340, 1828,    0,    0,    0, 5019, 2711,
    3349,    0, 1624, 3668,    0, 5114,    0,    0, 2997,    0,    0, 4872,    0,    0,    0,    0,
       0,    0,    0,    0, 5057,    0,    0, 3496, 4749,    0,    0,    0, 4495, 2721,    0,    0,
       0, 3949,    0,    0,    0, 3825, 2124,    0,    0, 5343,    0,    0,    0, 3633,    0, 2626,
       0,    0, 4674,    0,    0, 4306, 1663,    0,    0,    0,    0, 3796,    0, 5210,    0, 4697,
    5189,    0, 3595,    0,    0, 4120, 2531,    0, 2805,    0,    0,    0,    0, 4171, 5375,    0,
       0, 5446,    0,    0,    0,    0, 4461,    0,    0, 1706, 2781, 4974,    0,    0,    0, 5272,
       0, 2561,    0, 5306, 2846,    0,    0, 3359, 5663, 4434,    0,    0, 3620, 2723,    0,    0,
    4945,  194,    0,    0,    0, 3539,    0,    0, 3948, 1680, 1886, 3475,    0,    0, 3406,    0,
       0, 3410,    0,    0, 4570,    0, 3904, 3804,    0, 1799, 5013,    0,    0, 2592,    0, 5631,
       0,    0, 2022, 3340,    0,    0,    0,    0, 2647, 3732,    0,    0,    0, 4408,    0,    0,
    3721, 1756,    0,    0,    0, 4302, 4350, 4223,    0,    0,    0,    0, 3434,    0,    0, 2637,
       0,    0,    0, 4756,    0, 5107,    0, 3510,    0, 3752,    0,    0,    0, 3566,   52, 2811,
    4252, 1720, 3103,    0, 3947, 2075,    0,    0, 4569,    0,  253,    0, 3979,  178,    0,    0,
       0, 3174,    0,    0, 4771,    0,    0, 5556, 3587,    0,    0,    0,  181,    0, 4112,    0,
       0,    0,    0,    0,    0,    0, 1620,    0,    0, 2550, 1890,    0,    0,    0,    0,    0,
       0,    0,    0, 2733,    0,    0, 4711, 1745,    0, 2936, 4126,    0,    0,    0,    0, 2506,
    2035,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 4789,    0,    0,    0,
       0, 1929,    0,    0,    0,    0,    0,    0, 4682,    0, 4288, 2646, 5003, 4242,    0,   40,
    1766,    0,    0, 4356, 4318,    0,    0,    0,    0,    0, 3365,    0,    0,    0,    0, 5106,
    3585,    0,    0,    0,    0, 2087,    0,    0,    0,    0,    0,    0,    0, 1889, 5649,    0,
       0,    0, 1948, 3456, 2886,    0, 5041, 3673,    0,    0,    0,    0,    0,    0, 5316,    0,
       0,    0, 2613, 2980, 3124,    0,    0, 3811,  254,    0,    0,    0,    0, 3933,    0, 4167,
       0, 2093,    0,    0, 3951,    0,    0,    0,    0, 1824,    0,    0, 1662, 5108,    0,    0,
       0,    0,    0, 2642,    0, 2878,    0,    0,    0, 4267,    0,    0,  252,    0,    0, 4363,
    4470,    0,    0, 2670, 2608,    0, 3829, 4371,    0,    0,    0, 1648,    0, 3454, 2140,    0,
       0, 3609, 3347, 2145,    0,    0,    0,    0, 2853, 2021, 3856,    0,    0,  277, 4731,    0,
       0,    0, 1665, 3380, 2138,    0, 4690,    0,    0,    0,    0, 4193,    0, 4089,    0,    0,
       0, 4584, 1682, 2510,    0, 2119,    0,    0, 5361,    0,    0,    0,    0,    0,    0, 3787,
       0, 3610,    0,    0,    0, 2606,    0, 2149, 4755,    0,    0,    0,    0,    0, 4147, 4282,
       0, 2483,    0, 5095,    0, 2062,    0,    0, 4492,    0,    0,    0,    0,    0, 1670,    0,
       0,    0,    0,    0,    0, 1730,    0,    0,    0, 2832,    0,    0, 5100,    0, 4032,    0,
       0,    0,    0, 2495,    0,    0, 4502,    0,    0, 4442, 3784,    0, 3640,    0,    0,    0,
    1699, 4537,    0,    0, 4715,    0,    0,    0,    0,    0, 1818, 2831,    0,    0,    0,    0,
       0, 4564,    0, 3414, 5747, 3851,    0, 2745, 1764,    0, 3437,    0,    0,    0,    0,    0,
       0, 2043,    0, 3440,    0, 4077,    0, 2979,    0,    0,    0,    0,    0,    0, 4967,    0,
       0, 2038,    0,    0, 3893, 2679,    0,    0, 3584, 4092,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 3426, 3644, 2042,    0,    0,    0,    0,    0,    0,
       0,  239, 3112,    0, 4247,    0,    0,    0,   16,    0, 2873,   46,    0, 3356, 3822,    0,
    4487,    0,    0,    0,    0,    0,    0, 1856,    0,  174,    0,    0,    0, 4530,    0,    0,
       0,    0,    0, 3627, 1942, 5143,    0,    0,    0, 1947,    0,    0,    0,    0,    0,    0,
    2546,    0, 4753,    0,    0, 1833, 4054,    0,    0,    0,    0,    0, 4602,    0,    0, 4243,
       0,    0, 3589,    0, 3667,    0,    0,    0, 4131, 4574, 4673,    0,    0,    0,    0, 2560,
       0,    0, 3991,    0, 3696, 5186,    0,    0, 5231, 2681,    0,    0, 3793, 4490,    0,    0,
    1918,    0,    0,    0,    0, 1616,    0, 3592,    0, 3868,    0, 4649,    0,    0,    0,    0,
    4095,    0,    0,    0, 3795,    0, 3857,    0,    0,    0,    0,    0,    0,    0,    0,    0,
    1973, 3647, 1855, 3493,    0, 2541,    0, 3601, 2644,    0,    0, 3026, 4156,    0,    0,    0,
       0,    0, 3906,    0,    0,    0,    0, 2513,    0,    0,    0,    0,    0,    0, 3656, 4013,
       0, 4653, 4139,    0,    0,    0,    0, 3357,    0,    0, 3916,    0,    0, 5145, 3498, 4724,
       0, 3717,    0, 2957, 1813,    0,    0,   49,    0, 2030,    0,    0,   55,    0,    0,    0,
    4273,    0,    0,    0,    0,    0,    0, 2641,    0,    0,    0,    0,    0, 4180,    0,    0,
       0, 2558, 3405, 3690,    0,    0,    0,    0,    0,    0,    0,    0, 2547,    0,    0,    0,
    3827, 4720,    0,    0,    0,    0,    0,   87,    0,    0, 3899,    0, 3608, 4527,    0,    0,
    3030,    0,    0, 3550, 3352,    0,    0,    0,    0,    0, 4406,    0, 4542,    0,    0,    0,
       0, 2645,    0,    0,    0,    0,    0,    0,    0, 1965,    0, 2877,    0, 2636,    0,    0,
       0,    0,    0,    0,    0, 4327,    0,    0,    0, 2048,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 2521,    0, 4052,    0,    0,    0, 3874,    0,    0,    0,    0,    0, 2631,
    2678,    0,    0,    0, 4880, 4107, 1905,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 4867,    0,    0,    0,    0,    0,    0,    0,    0,    0, 2490,    0,    0,    0, 3435,
       0, 3801,    0, 4262,    0,    0,    0,    0,    0,    0, 1976,    0,    0,    0, 3932,    0,
       0, 2629,    0,    0,    0,    0,    0,    0,    0,    0, 1892,    0,    0,    0,    0, 3876,
    5410,    0, 2834, 1823,    0,    0,    0,  193, 1668, 3748,    0,    0,    0,    0, 3361,    0,
       0, 4096, 5144,    0,    0,    0, 3363,    0,    0,    0, 3782, 4714,    0,    0,    0,    0,
    3834, 3460,    0,    0, 4871,    0, 4717,    0,    0,    0,    0,    0,    0,    0, 2863,    0,
    4028, 3018,    0,    0,    0,    0,    0,    0,    0, 2044,    0,    0,    0, 4446,    0,    0,
    4968,    0, 1679,    0,    0, 1883,    0,    0, 2672, 4440,    0,    0,    0,    0, 4601,    0,
       0,    0, 1687, 1992,    0,    0,    0, 2758,    0,    0,    0, 4330, 3549,    0,    0,    0,
    4547, 1814,    0, 4056, 1696,    0, 3163,    0,    0,    0,    0, 5113,    0,    0,    0,    0,
       0,    0,    0,    0,    0, 4591, 4433,    0, 4317,    0, 4322,    0, 4900, 4800,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 4266,    0,    0,    0,    0, 4938,    0,    0,    0,
       0, 1784,    0, 3692,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 4094, 1785,    0,    0,    0,    0,
       0, 1752,    0,    0,    0, 2854, 3480, 1709,    0,    0,    0, 4268,    0,    0, 3477,    0,
       0,    0, 2012,    0,    0, 1701, 4217, 4493,    0, 3035, 1768,    0, 2023,    0, 3033,    0,
     267,    0, 2045, 4104, 3853,    0, 2735,    0,    0,    0,    0,    0,    0,    0, 5094, 1625,
    5309,    0, 3467,    0, 4575, 2762,    0, 4396,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0, 4895,    0, 1674, 3914,    0,    0, 1795,    0,    0,    0,    0,    0,    0,    0,
       0, 2535,  230,    0, 2731,    0,    0,    0,    0,    0,    0,    0, 3443,    0, 4983, 4457,
       0, 3526,    0, 3326,    0, 4101,    0,    0,    0, 4706,    0,    0, 2039,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,   23, 2029, 4275,    0,    0,    0, 3651,
       0,    0,    0,   60,    0, 3686,    0, 3528, 2788,    0, 3995,    0,    0, 5110,    0, 1957,
       0,    0,    0,    0,    0, 4314,    0, 1836,    0,    0,    0,    0,    0,    0,    0,    0,
    3888,    0,    0,    0,    0, 4664,    0,    0,    0,    0,    0,    0, 2684,    0, 5334, 4436,
    3939,    0, 1790, 1612,    0, 2651, 3021,    0,    0,    0,    0,   68, 3638, 1803,    0,  264,
       0, 4718,    0,    0, 1878,    0,    0,    0, 3661,    0,    0,    0,    0,    0,    0, 3866,
    4885,    0,    0,    0, 3393,    0, 3367,    0, 2473,    0,    0,    0,    0,    0, 1704,    0,
       0,    0, 3351,   21,    0, 3670, 1914, 1772, 4759,    0,    0,    0, 3481,    0,    0, 3718,
       0,    0, 1866,    0,    0,    0,    0, 4050,    0,    0, 1985,    0,    0,  207,    0,    0,
    2470,    0,    0,    0,    0, 2033,    0, 3469,    0,    0, 2472,    0,    0, 2017,    0,    0,
       0,    0,    0,    0, 1901,    0,    0, 4652,    0,    0,    0,    0, 4921,  243,    0,    0,
       0,    0,    0,    0, 2047,    0,    0,    0,    0,    0,  185, 2468,    0,  263,    0,    0,
    1614, 2941,  219,    0,    0,    0,  168,    0,    0, 4382,    0,    0,    0,    0, 2956,    0,
       0,    0,    0,    0, 2963, 1875, 2947,    0,    0, 1664, 2661,    0,    0,    0, 5190, 2750,
       0, 2792,    0,    0,    0,    0, 3501,    0,    0,    0, 3029,    0, 3453,    0, 3478,    0,
       0, 4009,    0,    0,    0,    0, 4888,    0,    0,    0, 4281, 3418,    0,    0,    0, 2074,
       0,    0, 3806, 2077, 4768, 3652,    0,    0, 5086, 4648,    0,    0,    0,    0,    0,    0,
       0,    0, 3369,    0,    0, 4443,    0,    0,    0,    0,    0,    0,    0, 2880,    0,    0,
       0,    0,    0, 5150,    0,    0,    0,    0,    0, 2849, 2856, 2738, 4173,    0,    0,    0,
    3639,    0, 1770,    0, 4472,    0,    0,    0,    0,    0,    0,    0,    0,    0, 3830,    0,
    4902, 4503,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 2604,    0,    0,    0,
       0,    0, 4012,    0, 3700, 1825, 1847,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 3445,    0,    0,    0,    0,    0, 2662,    0,    0,   35,    0,    0,    0,  221,    0,
       0,    0,    0, 2508,    0, 2851,    0, 4453,    0,    0,    0,    0,    0,    0, 2143,    0,
    3792,    0, 3436,    0,    0,    0,    0,    0,    0,    0, 3446,    0, 3654,    0, 2779,    0,
       0,    0,    0,    0,    0,    0,    0, 2744, 2086,    0,    0, 3715,    0, 1832,    0,    0,
       0,    0, 3515,    0,    0,    0,    0,    0, 1850,    0,    0,    0,    0,    0,  208, 4132,
      84,    0,    0,    0,    0, 4925, 4041,    0,    0,    0, 1713,    0,    0,    0,    0,    0,
       0,    0, 3675,    0, 1860,    0,    0,    0,    0, 1758, 3162, 4370,    0,    0,    0,    0,
       0, 2616,    0,    0,    0, 4857,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
      42,    0,    0, 4284,    0, 5152,    0,    0,    0,    0,    0,    0,    0, 4681,    0,    0,
    3837,    0, 1949, 1638,    0,    0,    0,    0,    0,    0, 4499, 3693,    0,    0,    0, 3892,
    4661,    0,    0,    0,    0,    0,    0,   75,    0,    0,    0,    0,    0,    0,    0,    0,
    4541,    0,    0,    0, 5207, 2475,    0,    0,    0,    0,    0, 2730,    0, 1656,    0, 4439,
       0, 4014,    0,    0,  206,    0,    0,    0,    0,    0, 4274,    0,    0,    0,    0,    0,
    3699,    0,    0,    0,    0,    0,    0, 3649,    0, 3808, 4650, 2011, 2586, 3836, 3816,    0,
       0,    0,    0,    0,    0,    0,    0, 5091, 2671, 4427,    0, 4098,    0,    0,    0,    0,
       0,    0, 2751,    0,    0, 2557,    0, 4456,    0, 2622,    0, 3553,    0,    0, 1661,    0,
    1900, 1908,    0,    0,    0,  170,    0,    0,    0,    0,    0,    0,    0, 4445,    0,    0,
    4707,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 4070, 3397,    0,    0,
       0,    0,    0,    0, 2741,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 5363,
    3884,    0,    0,    0, 3775,    0, 4611,    0,    0,    0,    0,    0,    0, 3034,    0, 4215,
       0,    0,    0, 5099,    0,    0,    0,    0,    0, 3719,    0,    0,    0, 3032,    0,   71,
       0, 5187,    0,    0,    0,    0, 2536,    0,    0,    0,   44, 3702,    0, 4251,    0,    0,
       0,    0,    0,    0,    0, 3502, 3438,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 3778,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 3431,    0,    0,    0,    0,   33,    0,    0,    0, 2933,    0,    0,    0, 3551,    0,
    3341,    0,    0, 4106,    0, 2493,    0, 3872,    0,    0,    0,    0,    0,    0, 2688,    0,
    2865,    0,    0,    0,    0, 3428,    0,    0, 1794,    0, 2868,    0, 2787,    0,    0,    0,
       0, 5171,    0,    0,    0, 4091,    0,    0, 3697,    0,    0, 2869, 4592,    0,    0,    0,
       0,    0,    0,    0, 2556,    0, 4100,    0, 1838, 2612,    0,    0,    0,    0,    0, 1879,
       0,    0,    0,    0,    0,    0,    0,    0, 1666,    0,    0, 4236, 3657,    0,    0,    0,
       0,    0,    0, 2722,    0,    0, 4133,    0, 4227,    0,    0,  220,    0,    0,    0,    0,
    1817,    0, 2673,  176,    0, 3993,   31,    0,    0,    0, 4987, 4816,    0, 3650,    0, 3421,
       0,    0,    0,    0, 3780, 3798, 3512,    0,    0,    0,    0,    0, 3569,    0,    0, 1891,
       0,    0,    0,    0, 1672,    0, 2938,    0,    0,    0,    0,    0,    0, 4264,    0, 4762,
       0,    0,    0,    0,    0, 3986,    0, 4355,    0, 4940,    0, 2497, 2859, 4323,    0,    0,
    3617, 5318,    0, 4596,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0, 3355,    0,    0,   86,    0, 3712,    0,    0,    0, 1919,    0,    0,    0,
       0,    0,    0,    0,    0, 2746,    0,    0,    0,    0,    0, 4237, 1887, 3022, 1637, 1733,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 4058,    0,    0,
       0,    0,    0,    0,    0, 2769,    0,    0, 3794,    0,    0,    0,   85, 2085,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0, 1782,    0, 2019, 4511,    0,    0,   50,    0,
       0,    0,    0,    0,    0,    0,    0, 4501, 3635,    0, 1652,    0,    0,    0, 4563,    0,
       0, 4680,    0, 3399,    0,    0, 4428, 2942,    0,    0, 3096,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0, 4431, 4342, 4044,    0,    0,    0,    0,    0, 1827, 1778,    0,
       0,    0, 3354,    0,    0,    0,    0,   67,    0,    0,    0,    0, 3407,    0, 2486,    0,
    1831, 4893, 5196,    0, 3626, 3575,    0,    0,    0,    0,    0, 2009,    0, 2955,    0, 5527,
    4125, 4877,    0, 3513, 2740, 3371,    0, 1843,    0,    0,    0, 4791,    0, 4212,    0,    0,
       0,    0,    0, 3682,    0, 4484, 2617,    0,    0,    0,    0,    0, 1972,    0,    0, 3623,
    4108,    0,    0, 2014, 2037, 4230,    0,    0,    0,    0,    0, 4508, 3430,    0, 4216,    0,
     218,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 4021,
    1711,    0,    0,    0,    0,    0,    0, 5153,    0, 3427, 1964, 4053,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 2527,    0,    0,
       0,    0,    0,    0,    0, 3788,    0,    0,    0,    0,    0, 5326, 4244,    0, 2528, 3031,
    3572,    0,    0,    0, 3348,    0, 3672,    0,    0,    0,    0, 4784,    0,    0, 4435,    0,
    4151,    0,    0,    0, 3402, 3450, 3912,   62,    0,    0,    0,    0,    0, 4231, 4548, 2954,
    1723,    0, 2667, 2864,    0,    0,    0, 1710, 4019,    0,    0,    0,    0, 4031, 2623,    0,
       0,    0,    0, 2839,    0,    0,    0,    0, 3878,   47, 3108, 4466, 3433,    0,    0,    0,
       0,    0, 4004,    0,    0,    0,    0,    0, 3095,    0,    0,    0,    0,    0,    0,    0,
       0, 4946,    0, 3789,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0, 3417, 3873,    0, 3770,    0,    0,    0,    0, 2858,    0,    0,    0,    0,    0,    0,
    3791,    0, 3394,    0,    0, 4876, 2757, 1646,    0,    0, 1629, 4018,    0,    0,    0,    0,
       0,    0, 1958, 2008, 4391,    0,    0, 5090,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0, 2879,    0,    0, 4161,    0, 1762,    0,    0,    0, 4438,    0,    0,    0,    0,
       0, 1631,    0,    0,    0,    0, 4027, 2084,    0,    0,    0, 5004,    0,    0,    0,    0,
       0, 4463,    0,    0,    0,    0,    0, 2540,    0,    0,    0,    0,    0,    0, 4647,    0,
       0,    0,    0,    0,    0, 4234,    0,    0,    0,    0,    0,    0,    0,  188,    0, 1956,
       0,    0, 1689,    0, 1718, 2945,    0,    0,    0,    0, 1848,    0,    0,   43,    0,    0,
       0,    0,    0,    0,    0,    0, 4932,    0,    0, 2615,    0, 4060, 4332,    0,  186,    0,
       0,    0,    0,    0, 4136, 4747,    0, 3473, 3392, 2610,    0,    0,    0,    0,    0,    0,
    2507,    0,    0, 1773,   37,    0,    0, 4033,    0, 5201,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0, 1627,    0, 4043,    0,    0,    0,    0,    0, 1725,
    4122,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 2492, 2761,
       0,    0, 4246,    0,    0, 3655, 2083,    0,    0,    0,    0, 2007,    0,    0,    0,    0,
    3570,    0,    0, 4073,    0,    0,    0,    0,    0, 4135,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 3497,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,   29,    0, 4218,    0,    0,    0,    0, 2603,
       0,    0, 3987,    0, 2639, 3573,    0, 2552,    0, 3911,    0,    0, 3637,    0,    0,    0,
    1913,    0,    0,   19, 2836,    0,    0,    0,    0,    0,    0, 2964,    0, 4677, 2965,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 2766, 2619,    0,    0,    0,    0,
       0,    0,    0, 2614, 2559,    0,    0,    0,    0,    0, 2767, 5151,   66,    0,    0,   26,
    3590,    0,    0,    0,    0, 5188,    0, 1622,    0, 4746,    0,    0,    0,    0, 3409,    0,
    2542,    0,    0, 2937,    0,    0,    0, 4152, 3439,    0,    0,    0,    0,   28,    0,   58,
       0,    0, 3612,    0,    0,    0,    0,    0,  199,    0, 1774,    0, 2966, 4072, 4278,    0,
       0,    0,    0,    0,    0, 1688,    0, 3429,    0, 4157,    0,    0,    0,    0,    0,    0,
       0, 3389,    0, 1810,    0, 1979,    0, 4449,    0,    0,    0,    0, 1826,    0, 4506,    0,
       0,    0,    0,    0, 2728, 2760,    0, 3848,    0,    0,    0,    0,    0,    0, 4868,    0,
       0, 4068, 2607,    0,    0,    0, 1618,    0,    0, 4429,    0,    0,    0,    0, 3381,    0,
    2501,    0, 3630,    0,    0,    0, 3687,    0,    0, 1654,    0,    0, 3844, 2748, 2496,    0,
       0,    0, 3737,    0,    0,    0,    0,    0,    0,    0, 4703,    0,    0, 4675,    0, 2551,
       0,    0,    0,    0, 4454,    0,    0,    0, 2747,    0,    0,    0,    0,    0,    0,    0,
];
